//! Backend Error Type
//!
//! One variant per consumed backend call, carrying the backend's message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("create_paste failed: {0}")]
    Create(String),
    #[error("list_pastes failed: {0}")]
    List(String),
    #[error("get_paste failed: {0}")]
    Get(String),
}
