//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! only holds the last fetched copies of server-owned lists; the server
//! stays authoritative and every mutation refetches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards as last fetched
    pub boards: Vec<Board>,
    /// Tasks for the selected board as last fetched
    pub tasks: Vec<Task>,
    /// Email of the validated user, None while unauthenticated
    pub user_email: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
