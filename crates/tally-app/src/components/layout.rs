//! Root layout: chrome around the routed outlet
//!
//! Chrome visibility comes from the route table's metadata via
//! `chrome_for_path`, re-evaluated on every path change. The decision is
//! independent of the route guard wrapping the outlet's content.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::{Footer, Navbar, Sidebar};

/// Layout shell rendered at the route-tree root
#[component]
pub fn Layout() -> impl IntoView {
    let location = use_location();
    let chrome = Memo::new(move |_| tally_core::layout::chrome_for_path(&location.pathname.get()));

    view! {
        <div class="layout-container">
            <Navbar />
            <div class="layout-main">
                <Show when=move || chrome.get().sidebar>
                    <Sidebar />
                </Show>
                <div class="layout-content">
                    <Outlet />
                </div>
            </div>
            <Footer />
        </div>
    }
}
