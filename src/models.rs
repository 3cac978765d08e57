//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Backend-assigned paste identifier. Opaque to the client: displayed and
/// compared for selection, never parsed or constructed locally.
pub type PasteId = u64;

/// Paste record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paste {
    pub id: PasteId,
    pub content: String,
    /// Creation time, nanoseconds since the Unix epoch
    pub timestamp: u64,
}
