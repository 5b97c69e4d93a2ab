//! Static footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 Tally. All rights reserved."</p>
        </footer>
    }
}
