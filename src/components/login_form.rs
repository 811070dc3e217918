//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, View};
use crate::session;
use crate::storage::LocalStore;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let email_val = email.get();
        let password_val = password.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(&email_val, &password_val).await {
                Ok(resp) => {
                    session::store_token(&LocalStore, &resp.access_token);
                    ctx.navigate(View::Board);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("login failed: {err}").into());
                    set_error.set(Some(err.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Log In"</h1>

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! {
                    <p class="error-message">{msg}</p>
                })}

                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Log In" }}
                </button>

                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| ctx.navigate(View::Register)
                >
                    "No account? Register"
                </button>
            </form>
        </div>
    }
}
