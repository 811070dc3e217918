//! Task Item Component
//!
//! One task row: summary line with completion marker, collapsible
//! description (client-side only, default hidden), completion toggle,
//! direct status selector and delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{status_label, Task, TASK_STATUSES};
use crate::session;
use crate::storage::LocalStore;

#[component]
pub fn TaskItem(task: Task, set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.completed;
    let summary = task.summary();
    let description = task
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_string());
    let current_status = task.status.clone().unwrap_or_default();

    // Resets to hidden on every list refresh
    let (show_desc, set_show_desc) = signal(false);

    let toggle_completion = move |_| {
        let next = !completed;
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            // The status label follows the flag; the second call only
            // runs after the first succeeded.
            let result = async {
                api::set_task_completed(&token, id, next).await?;
                api::set_task_status(&token, id, status_label(next)).await
            }
            .await;
            match result {
                Ok(()) => ctx.reload_tasks(),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to toggle task: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    let update_status = move |ev: web_sys::Event| {
        let new_status = event_target_value(&ev);
        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            match api::set_task_status(&token, id, &new_status).await {
                Ok(()) => ctx.reload_tasks(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("failed to update task status: {err}").into(),
                    );
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    let delete_task = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this task?")
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
            match api::delete_task(&token, id).await {
                Ok(()) => ctx.reload_tasks(),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to delete task: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <li class="task-row">
            <div class="task-line">
                <span class="task-summary" class:completed=completed>
                    {summary}
                </span>
                <button
                    class="desc-toggle-btn"
                    on:click=move |_| set_show_desc.update(|v| *v = !*v)
                >
                    {move || if show_desc.get() { "Hide Description" } else { "Show Description" }}
                </button>
            </div>

            <Show when=move || show_desc.get()>
                <div class="task-description">
                    <strong>"Description: "</strong>
                    {description.clone()}
                </div>
            </Show>

            <div class="task-actions">
                <button class="complete-btn" on:click=toggle_completion>
                    {if completed { "Mark as Incomplete" } else { "Mark as Complete" }}
                </button>
                <select class="status-select" on:change=update_status>
                    {TASK_STATUSES.iter().map(|s| view! {
                        <option value=*s selected={current_status == *s}>
                            {*s}
                        </option>
                    }).collect_view()}
                </select>
                <button class="delete-btn" on:click=delete_task>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
