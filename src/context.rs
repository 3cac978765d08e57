//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::BackendError;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Submission round trip in flight - read
    pub submitting: ReadSignal<bool>,
    set_submitting: WriteSignal<bool>,
    /// Last backend failure, if any - read
    pub error: ReadSignal<Option<BackendError>>,
    set_error: WriteSignal<Option<BackendError>>,
}

impl AppContext {
    pub fn new(
        submitting: (ReadSignal<bool>, WriteSignal<bool>),
        error: (
            ReadSignal<Option<BackendError>>,
            WriteSignal<Option<BackendError>>,
        ),
    ) -> Self {
        Self {
            submitting: submitting.0,
            set_submitting: submitting.1,
            error: error.0,
            set_error: error.1,
        }
    }

    /// Enter the submitting state. Returns false when a round trip is
    /// already in flight, leaving the state untouched.
    pub fn begin_submit(&self) -> bool {
        if self.submitting.get() {
            return false;
        }
        self.set_submitting.set(true);
        true
    }

    /// Leave the submitting state
    pub fn end_submit(&self) {
        self.set_submitting.set(false);
    }

    /// Surface a backend failure in the error banner
    pub fn report_error(&self, err: BackendError) {
        self.set_error.set(Some(err));
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}
