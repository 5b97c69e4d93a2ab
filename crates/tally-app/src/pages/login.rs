//! Login form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use tally_core::models::Credentials;

use crate::io::gateway;
use crate::session::use_session;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match gateway(&session).login(&credentials).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) => {
                    log::error!("Login failed: {err}");
                    set_error.set(Some("Invalid credentials. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login">
            <h2>"Login to your account"</h2>
            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
                <button type="submit" disabled=loading>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="error-msg">{message}</p> })}
            <p>
                "Don't have an account? "
                <A href="/register">"Create Account"</A>
            </p>
        </div>
    }
}
