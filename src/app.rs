//! Task-Board Frontend App
//!
//! Root component: view switching between the auth forms and the board
//! view, plus the session guard that protects the latter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{BoardPanel, LoginForm, NewTaskForm, RegisterForm, SessionBar, TaskPanel};
use crate::context::{AppContext, View};
use crate::session;
use crate::storage::LocalStore;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (view, set_view) = signal(View::Board);
    let (boards_version, set_boards_version) = signal(0u32);
    let (tasks_version, set_tasks_version) = signal(0u32);
    let (selected_board, set_selected_board) = signal::<Option<u32>>(None);

    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(
        (view, set_view),
        (boards_version, set_boards_version),
        (tasks_version, set_tasks_version),
        (selected_board, set_selected_board),
    );
    provide_context(ctx);

    // Session guard: entering the board view requires a token the server
    // still accepts. Any validation failure clears the token and sends
    // the user to registration.
    Effect::new(move |_| {
        if view.get() != View::Board {
            return;
        }
        spawn_local(async move {
            let local = LocalStore;
            let Some(token) = session::load_token(&local) else {
                ctx.navigate(View::Register);
                return;
            };
            let result = api::user_info(&token).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("session validation failed: {err}").into());
            }
            match session::resolve_validation(&local, result) {
                Some(info) => store.user_email().set(Some(info.email)),
                None => {
                    store.user_email().set(None);
                    ctx.navigate(View::Register);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            {move || match view.get() {
                View::Register => view! { <RegisterForm /> }.into_any(),
                View::Login => view! { <LoginForm /> }.into_any(),
                View::Board => view! {
                    <SessionBar />
                    <main class="main-content">
                        <h1>"Task Boards"</h1>
                        <BoardPanel />
                        <NewTaskForm />
                        <TaskPanel />
                    </main>
                }.into_any(),
            }}
        </div>
    }
}
