//! Board Panel Component
//!
//! Lists boards, creates and deletes them. The list is replaced
//! wholesale on every fetch; a failed refresh leaves the last fetched
//! list in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::non_blank;
use crate::session;
use crate::storage::LocalStore;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Refetch on every version bump
    Effect::new(move |_| {
        let _ = ctx.boards_version.get();
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            match api::list_boards(&token).await {
                Ok(boards) => {
                    store.boards().set(boards);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to fetch boards: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if non_blank(&name).is_none() {
            return;
        }
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            match api::create_board(&token, &name).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    set_error.set(None);
                    ctx.reload_boards();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to create board: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    let delete_board = move |id: u32| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this board?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            match api::delete_board(&token, id).await {
                Ok(()) => {
                    // The deleted board may have been the selected one
                    ctx.select_board(None);
                    ctx.reload_boards();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to delete board: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <section class="board-panel">
            <h2>"Boards"</h2>

            <form class="new-board-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Board name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Create Board"</button>
            </form>

            {move || error.get().map(|msg| view! {
                <p class="error-message">{msg}</p>
            })}

            <ul class="boards-list">
                <For
                    each=move || store.boards().get()
                    key=|board| board.id
                    children=move |board| {
                        let id = board.id;
                        view! {
                            <li class="board-row">
                                <span class="board-name">{board.name.clone()}</span>
                                <button class="delete-btn" on:click=move |_| delete_board(id)>
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
