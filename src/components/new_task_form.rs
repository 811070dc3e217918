//! New Task Form Component
//!
//! Creating a task requires a selected board and a non-blank title;
//! anything else is a no-op with no request issued.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskArgs};
use crate::context::use_app_context;
use crate::models::non_blank;
use crate::session;
use crate::storage::LocalStore;

/// Priority options offered on creation, empty means unset
const PRIORITIES: &[&str] = &["", "low", "medium", "high"];

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (priority, set_priority) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(board_id) = ctx.selected_board.get() else {
            return;
        };
        let title_val = title.get();
        if non_blank(&title_val).is_none() {
            return;
        }
        let description_val = description.get();
        let due_date_val = due_date.get();
        let priority_val = priority.get();

        spawn_local(async move {
            let Some(token) = session::load_token(&LocalStore) else {
                return;
            };
            let args = CreateTaskArgs {
                board_id,
                title: &title_val,
                description: non_blank(&description_val),
                due_date: non_blank(&due_date_val),
                priority: non_blank(&priority_val),
            };
            match api::create_task(&token, &args).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_due_date.set(String::new());
                    set_priority.set(String::new());
                    set_error.set(None);
                    ctx.reload_tasks();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to create task: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            <select
                prop:value=move || priority.get()
                on:change=move |ev| set_priority.set(event_target_value(&ev))
            >
                {PRIORITIES.iter().map(|p| view! {
                    <option value=*p>
                        {if p.is_empty() { "No Priority" } else { *p }}
                    </option>
                }).collect_view()}
            </select>
            <button type="submit">"Add Task"</button>

            {move || error.get().map(|msg| view! {
                <p class="error-message">{msg}</p>
            })}
        </form>
    }
}
