//! UI Components
//!
//! Leptos components for the pastebin view.

mod error_banner;
mod new_paste_form;
mod paste_detail;
mod paste_list;

pub use error_banner::ErrorBanner;
pub use new_paste_form::NewPasteForm;
pub use paste_detail::PasteDetail;
pub use paste_list::PasteList;
