//! Task-Board Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod session;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Theme applies before anything renders and regardless of session state
    theme::apply_theme(theme::load_theme(&storage::LocalStore));
    mount_to_body(App);
}
