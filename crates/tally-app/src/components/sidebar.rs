//! Sidebar with section links and logout

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::io::gateway;
use crate::session::use_session;

/// Sidebar shown on the budgeting screens
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            // Tokens stay in place when the backend rejects the logout;
            // the user keeps their session and can retry.
            match gateway(&session).logout().await {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => log::error!("Logout failed: {err}"),
            }
        });
    };

    view! {
        <div class="sidebar">
            <ul>
                <li><A href="/dashboard">"Dashboard"</A></li>
                <li><A href="/transactions">"Transactions"</A></li>
                <li><A href="/budgets">"Budgets"</A></li>
            </ul>
            <div class="sidebar-logout">
                <button on:click=on_logout>"Logout"</button>
            </div>
        </div>
    }
}
