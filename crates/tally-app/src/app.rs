//! Main App component and route table

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use tally_core::Session;

use crate::components::{Layout, RequireAuth};
use crate::pages::{Budgets, Dashboard, EditTransaction, Home, Login, Register, Transactions};
use crate::session::token_store;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::new(token_store()));

    view! {
        <Title text="Tally" />
        <Router>
            <Routes fallback=|| view! { <p>"Not found"</p> }>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=Home />
                    <Route path=path!("login") view=Login />
                    <Route path=path!("register") view=Register />
                    <Route
                        path=path!("dashboard")
                        view=|| view! { <RequireAuth><Dashboard /></RequireAuth> }
                    />
                    <Route
                        path=path!("transactions")
                        view=|| view! { <RequireAuth><Transactions /></RequireAuth> }
                    />
                    <Route
                        path=path!("transactions/:id/edit")
                        view=|| view! { <RequireAuth><EditTransaction /></RequireAuth> }
                    />
                    <Route
                        path=path!("budgets")
                        view=|| view! { <RequireAuth><Budgets /></RequireAuth> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
