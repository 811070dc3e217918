//! Session Bar Component
//!
//! Shows who is logged in, the logout control and the theme toggle.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::context::{use_app_context, View};
use crate::session;
use crate::storage::LocalStore;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SessionBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Synchronous, no network call
    let logout = move |_| {
        session::clear_token(&LocalStore);
        store.user_email().set(None);
        ctx.navigate(View::Login);
    };

    view! {
        <header class="session-bar">
            <span class="user-email">
                {move || store.user_email().get().map(|email| format!("Logged in as: {email}"))}
            </span>
            <ThemeToggle />
            <Show when=move || store.user_email().get().is_some()>
                <button class="logout-btn" on:click=logout>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
