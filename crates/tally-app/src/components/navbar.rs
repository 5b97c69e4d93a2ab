//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::session::use_session;

/// Always-visible navigation bar; the link set follows the session
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    // The store itself is not reactive, so re-read it on every path change.
    let authenticated = Memo::new(move |_| {
        location.pathname.track();
        session.is_authenticated()
    });

    view! {
        <nav class="nav">
            <ul>
                <li><A href="/">"Home"</A></li>
                <Show when=move || !authenticated.get()>
                    <li><A href="/login">"Login"</A></li>
                    <li><A href="/register">"Register"</A></li>
                </Show>
                <Show when=move || authenticated.get()>
                    <li><A href="/dashboard">"Dashboard"</A></li>
                </Show>
            </ul>
        </nav>
    }
}
