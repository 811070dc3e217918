//! Theme Toggle Component
//!
//! Flips the light/dark preference and persists it. Independent of
//! session and network state.

use leptos::prelude::*;

use crate::storage::LocalStore;
use crate::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = signal(theme::load_theme(&LocalStore));

    let toggle = move |_| {
        let next = current.get().toggled();
        theme::apply_theme(next);
        theme::store_theme(&LocalStore, next);
        set_current.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=toggle>
            {move || match current.get() {
                Theme::Light => "Dark Mode",
                Theme::Dark => "Light Mode",
            }}
        </button>
    }
}
