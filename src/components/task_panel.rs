//! Task Panel Component
//!
//! Board selector plus the task list for the selected board, with sort
//! and filter controls forwarded to the server. The list is replaced
//! wholesale on every fetch; description panels reset to hidden.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskQuery};
use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::models::{SortKey, StatusFilter};
use crate::session;
use crate::storage::LocalStore;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (sort_by, set_sort_by) = signal(SortKey::default());
    let (filter, set_filter) = signal(StatusFilter::default());
    let (error, set_error) = signal::<Option<String>>(None);

    // Refetch whenever the board, the controls or the version change
    Effect::new(move |_| {
        let _ = ctx.tasks_version.get();
        let sort = sort_by.get();
        let status = filter.get();
        let Some(board_id) = ctx.selected_board.get() else {
            store.tasks().set(Vec::new());
            return;
        };
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            let query = TaskQuery {
                board_id,
                sort_by: sort,
                status,
            };
            match api::list_tasks(&token, &query).await {
                Ok(tasks) => {
                    store.tasks().set(tasks);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to fetch tasks: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    });

    let on_board_change = move |ev: web_sys::Event| {
        ctx.select_board(event_target_value(&ev).parse::<u32>().ok());
    };

    view! {
        <section class="task-panel">
            <h2>"Tasks"</h2>

            <div class="task-controls">
                <select class="board-select" on:change=on_board_change>
                    <option value="" disabled selected=move || ctx.selected_board.get().is_none()>
                        "Select a Board"
                    </option>
                    <For
                        each=move || store.boards().get()
                        key=|board| board.id
                        children=move |board| {
                            let id = board.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || ctx.selected_board.get() == Some(id)
                                >
                                    {board.name.clone()}
                                </option>
                            }
                        }
                    />
                </select>

                <select
                    class="task-sort"
                    on:change=move |ev| set_sort_by.set(SortKey::from_str(&event_target_value(&ev)))
                >
                    <option value="">"Creation Order"</option>
                    <option value="due_date">"Sort by Due Date"</option>
                    <option value="priority">"Sort by Priority"</option>
                </select>

                <select
                    class="task-filter"
                    on:change=move |ev| set_filter.set(StatusFilter::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All Statuses"</option>
                    <option value="pending">"Pending"</option>
                    <option value="done">"Done"</option>
                </select>
            </div>

            {move || error.get().map(|msg| view! {
                <p class="error-message">{msg}</p>
            })}

            <ul class="tasks-list">
                <For
                    each=move || store.tasks().get()
                    key=|task| task.id
                    children=move |task| view! { <TaskItem task=task set_error=set_error /> }
                />
            </ul>
        </section>
    }
}
