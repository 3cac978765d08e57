//! Backend Collaborator Bindings
//!
//! Frontend bindings to the pastebin backend. The host page installs a
//! bridge at `window.pastebin_backend.invoke(method, args)` returning a
//! promise; everything behind it (transport, storage, id assignment) is the
//! backend's business.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::BackendError;
use crate::models::{Paste, PasteId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "pastebin_backend"])]
    async fn invoke(method: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Call Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreatePasteArgs<'a> {
    pub content: &'a str,
}

#[derive(Serialize)]
pub struct PasteIdArgs {
    pub id: PasteId,
}

/// Backend collaborator seam.
///
/// The view flow only ever talks to the backend through this trait, so it
/// can run against an in-memory fake in tests.
#[async_trait(?Send)]
pub trait PasteBackend {
    /// Create a paste from raw content; the backend assigns id and timestamp.
    async fn create_paste(&self, content: &str) -> Result<Paste, BackendError>;

    /// Fetch the full current set of pastes, in backend order.
    async fn list_pastes(&self) -> Result<Vec<Paste>, BackendError>;

    /// Look up a single paste; fails for unknown ids.
    async fn get_paste(&self, id: PasteId) -> Result<Paste, BackendError>;
}

/// Production backend reached through the host bridge.
#[derive(Clone, Copy, Default)]
pub struct HostBackend;

impl HostBackend {
    async fn call<T>(method: &str, args: JsValue) -> Result<T, String>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = invoke(method, args).await.map_err(js_error_message)?;
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }
}

#[async_trait(?Send)]
impl PasteBackend for HostBackend {
    async fn create_paste(&self, content: &str) -> Result<Paste, BackendError> {
        let args = serde_wasm_bindgen::to_value(&CreatePasteArgs { content })
            .map_err(|e| BackendError::Create(e.to_string()))?;
        Self::call("create_paste", args)
            .await
            .map_err(BackendError::Create)
    }

    async fn list_pastes(&self) -> Result<Vec<Paste>, BackendError> {
        Self::call("list_pastes", JsValue::NULL)
            .await
            .map_err(BackendError::List)
    }

    async fn get_paste(&self, id: PasteId) -> Result<Paste, BackendError> {
        let args = serde_wasm_bindgen::to_value(&PasteIdArgs { id })
            .map_err(|e| BackendError::Get(e.to_string()))?;
        Self::call("get_paste", args).await.map_err(BackendError::Get)
    }
}

/// Pull a readable message out of a rejected bridge promise.
fn js_error_message(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
