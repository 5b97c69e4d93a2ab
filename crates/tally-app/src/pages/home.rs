//! Landing page

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Welcome to Tally"</h1>
            <p>
                "Effortlessly manage your finances. Track your expenses, set "
                "budgets, and stay on top of your spending."
            </p>
            <p>
                "Start by adding your first expense or setting a monthly budget "
                "goal to keep your finances under control."
            </p>
        </div>
    }
}
