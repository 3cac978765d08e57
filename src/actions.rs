//! View Actions
//!
//! The backend round trips behind the components, written against the
//! `PasteBackend` seam so call ordering is testable off the DOM.

use crate::backend::PasteBackend;
use crate::error::BackendError;
use crate::models::{Paste, PasteId};

/// Fetch the full paste list for the initial load or a refresh.
///
/// The caller replaces its snapshot wholesale with the returned sequence;
/// the snapshot is never mutated in place.
pub async fn refresh<B: PasteBackend>(backend: &B) -> Result<Vec<Paste>, BackendError> {
    backend.list_pastes().await
}

/// Submit new paste content: create, then refetch the list.
///
/// Empty content short-circuits to `Ok(None)` without touching the backend.
/// Otherwise the updated snapshot is returned only after both round trips
/// complete; there is no optimistic update. A failed create skips the
/// refetch entirely.
pub async fn submit<B: PasteBackend>(
    backend: &B,
    content: &str,
) -> Result<Option<Vec<Paste>>, BackendError> {
    if content.is_empty() {
        return Ok(None);
    }
    backend.create_paste(content).await?;
    refresh(backend).await.map(Some)
}

/// Look up one paste for the detail column.
pub async fn load_detail<B: PasteBackend>(
    backend: &B,
    id: PasteId,
) -> Result<Paste, BackendError> {
    backend.get_paste(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// In-memory backend recording every call in order.
    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        pastes: RefCell<Vec<Paste>>,
        fail_create: bool,
        fail_list: bool,
    }

    impl FakeBackend {
        fn with_pastes(pastes: Vec<Paste>) -> Self {
            Self {
                pastes: RefCell::new(pastes),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn paste(id: u64, content: &str) -> Paste {
        Paste {
            id,
            content: content.to_string(),
            timestamp: id * 1_000_000_000,
        }
    }

    #[async_trait(?Send)]
    impl PasteBackend for FakeBackend {
        async fn create_paste(&self, content: &str) -> Result<Paste, BackendError> {
            self.calls.borrow_mut().push(format!("create:{}", content));
            if self.fail_create {
                return Err(BackendError::Create("backend unreachable".to_string()));
            }
            let id = self.pastes.borrow().len() as u64 + 1;
            let created = paste(id, content);
            self.pastes.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn list_pastes(&self) -> Result<Vec<Paste>, BackendError> {
            self.calls.borrow_mut().push("list".to_string());
            if self.fail_list {
                return Err(BackendError::List("backend unreachable".to_string()));
            }
            Ok(self.pastes.borrow().clone())
        }

        async fn get_paste(&self, id: PasteId) -> Result<Paste, BackendError> {
            self.calls.borrow_mut().push(format!("get:{}", id));
            self.pastes
                .borrow()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| BackendError::Get(format!("paste with id={} not found", id)))
        }
    }

    #[tokio::test]
    async fn submit_creates_then_lists() {
        let backend = FakeBackend::default();

        let result = submit(&backend, "hello").await.unwrap();

        assert_eq!(backend.calls(), vec!["create:hello", "list"]);
        assert_eq!(result, Some(vec![paste(1, "hello")]));
    }

    #[tokio::test]
    async fn submit_empty_makes_no_backend_calls() {
        let backend = FakeBackend::default();

        let result = submit(&backend, "").await.unwrap();

        assert!(backend.calls().is_empty());
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn refresh_returns_backend_sequence_in_order() {
        let backend =
            FakeBackend::with_pastes(vec![paste(3, "c"), paste(1, "a"), paste(2, "b")]);

        let snapshot = refresh(&backend).await.unwrap();

        assert_eq!(backend.calls(), vec!["list"]);
        assert_eq!(snapshot, vec![paste(3, "c"), paste(1, "a"), paste(2, "b")]);
    }

    #[tokio::test]
    async fn submit_appears_after_round_trip_against_empty_backend() {
        let backend = FakeBackend::default();

        assert_eq!(refresh(&backend).await.unwrap(), vec![]);

        let result = submit(&backend, "hello").await.unwrap().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].content, "hello");
    }

    #[tokio::test]
    async fn failed_create_skips_the_refetch() {
        let backend = FakeBackend {
            fail_create: true,
            ..Default::default()
        };

        let err = submit(&backend, "hello").await.unwrap_err();

        assert_eq!(err, BackendError::Create("backend unreachable".to_string()));
        assert_eq!(backend.calls(), vec!["create:hello"]);
    }

    #[tokio::test]
    async fn failed_list_propagates_after_create() {
        let backend = FakeBackend {
            fail_list: true,
            ..Default::default()
        };

        let err = submit(&backend, "hello").await.unwrap_err();

        assert_eq!(err, BackendError::List("backend unreachable".to_string()));
        assert_eq!(backend.calls(), vec!["create:hello", "list"]);
    }

    #[tokio::test]
    async fn detail_lookup_finds_by_id() {
        let backend = FakeBackend::with_pastes(vec![paste(1, "a"), paste(2, "b")]);

        let found = load_detail(&backend, 2).await.unwrap();

        assert_eq!(found, paste(2, "b"));
    }

    #[tokio::test]
    async fn detail_lookup_unknown_id_fails() {
        let backend = FakeBackend::default();

        let err = load_detail(&backend, 42).await.unwrap_err();

        assert_eq!(err, BackendError::Get("paste with id=42 not found".to_string()));
    }
}
