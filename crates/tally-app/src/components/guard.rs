//! Route guard component wrapping protected subtrees
//!
//! The decision itself is the core's declarative middleware; this
//! component re-evaluates it on every path change and commits the
//! redirect. A rejected navigation never mounts its children.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use tally_core::guard::{self, NavDecision};

use crate::session::use_session;

/// Renders children only when the navigation guard allows the current
/// path; otherwise replaces the navigation with a redirect to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| guard::decide(&session, &location.pathname.get()));

    Effect::new(move |_| {
        if let NavDecision::Redirect(target) = decision.get() {
            navigate(target, Default::default());
        }
    });

    move || match decision.get() {
        NavDecision::Allow => children().into_any(),
        NavDecision::Redirect(_) => ().into_any(),
    }
}
