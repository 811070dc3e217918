//! Session Token Lifecycle
//!
//! The bearer token is the only authoritative client-side session state.
//! It is created on login, read on every protected call and destroyed on
//! logout or on any failed validation.

use crate::api::{ApiError, UserInfo};
use crate::storage::{KeyValueStore, TOKEN_KEY};

pub fn load_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn store_token(store: &impl KeyValueStore, token: &str) {
    store.set(TOKEN_KEY, token);
}

pub fn clear_token(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
}

/// Applies the outcome of a user-info validation call.
///
/// Any failure, transport or application, clears the stored token and
/// demands re-authentication. Returns the validated user on success.
pub fn resolve_validation(
    store: &impl KeyValueStore,
    result: Result<UserInfo, ApiError>,
) -> Option<UserInfo> {
    match result {
        Ok(info) => Some(info),
        Err(_) => {
            clear_token(store);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_token_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(load_token(&store), None);

        store_token(&store, "abc123");
        assert_eq!(load_token(&store), Some("abc123".to_string()));

        clear_token(&store);
        assert_eq!(load_token(&store), None);
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let store = MemoryStore::default();
        store_token(&store, "");
        assert_eq!(load_token(&store), None);
    }

    #[test]
    fn test_validation_success_keeps_token() {
        let store = MemoryStore::default();
        store_token(&store, "abc123");

        let user = resolve_validation(
            &store,
            Ok(UserInfo {
                email: "a@b.c".to_string(),
            }),
        );

        assert_eq!(user.unwrap().email, "a@b.c");
        assert_eq!(load_token(&store), Some("abc123".to_string()));
    }

    #[test]
    fn test_rejected_validation_clears_token() {
        let store = MemoryStore::default();
        store_token(&store, "stale");

        let user = resolve_validation(
            &store,
            Err(ApiError::Api {
                status: 401,
                message: "Unauthorized".to_string(),
            }),
        );

        assert!(user.is_none());
        assert_eq!(load_token(&store), None);
    }

    #[test]
    fn test_transport_failure_clears_token() {
        let store = MemoryStore::default();
        store_token(&store, "stale");

        let user = resolve_validation(&store, Err(ApiError::Network("timed out".to_string())));

        assert!(user.is_none());
        assert_eq!(load_token(&store), None);
    }
}
