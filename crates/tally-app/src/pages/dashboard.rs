//! Dashboard: budget summary plus the two aggregate tables

use leptos::prelude::*;
use leptos::task::spawn_local;

use tally_core::models::{BudgetSummary, CategorySpending, MonthlyExpense};

use crate::io::gateway;
use crate::session::use_session;

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    let (summary, set_summary) = signal(None::<BudgetSummary>);
    let (by_category, set_by_category) = signal(None::<Vec<CategorySpending>>);
    let (over_time, set_over_time) = signal(None::<Vec<MonthlyExpense>>);
    let (error, set_error) = signal(None::<String>);

    Effect::new({
        let session = session.clone();
        move |_| {
            let session = session.clone();
            spawn_local(async move {
                let client = gateway(&session);
                match client.budget_summary().await {
                    Ok(data) => set_summary.set(Some(data)),
                    Err(err) => {
                        log::error!("Loading dashboard data failed: {err}");
                        set_error.set(Some(
                            "An error occurred while loading data. Please try again later."
                                .to_string(),
                        ));
                        return;
                    }
                }
                match client.spending_by_category().await {
                    Ok(data) => set_by_category.set(Some(data)),
                    Err(err) => log::error!("Loading spending by category failed: {err}"),
                }
                match client.expenses_over_time().await {
                    Ok(data) => set_over_time.set(Some(data)),
                    Err(err) => log::error!("Loading expenses over time failed: {err}"),
                }
            });
        }
    });

    view! {
        <div class="dashboard">
            <h1>"Dashboard"</h1>
            {move || error.get().map(|msg| view! { <p class="error-msg">{msg}</p> })}

            <section class="budget-summary">
                <h3>"Budget Summary"</h3>
                {move || match summary.get() {
                    Some(s) => view! {
                        <ul>
                            <li><strong>"Budget: "</strong>{s.budget_amount}</li>
                            <li><strong>"Spent: "</strong>{s.spent_amount}</li>
                            <li><strong>"Remaining: "</strong>{s.remaining_amount}</li>
                        </ul>
                    }
                    .into_any(),
                    None => view! { <p>"Loading summary..."</p> }.into_any(),
                }}
            </section>

            <section>
                <h3>"Spending by Category"</h3>
                {move || match by_category.get() {
                    Some(rows) if rows.is_empty() => {
                        view! { <p>"No spending data available"</p> }.into_any()
                    }
                    Some(rows) => view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Category"</th>
                                    <th>"Amount"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.category}</td>
                                                <td>{row.amount}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                    None => view! { <p>"Loading..."</p> }.into_any(),
                }}
            </section>

            <section>
                <h3>"Total Expenses Over Time"</h3>
                {move || match over_time.get() {
                    Some(rows) if rows.is_empty() => {
                        view! { <p>"No expense data available"</p> }.into_any()
                    }
                    Some(rows) => view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Month"</th>
                                    <th>"Total Spent"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.month}</td>
                                                <td>{row.total_spent}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                    None => view! { <p>"Loading..."</p> }.into_any(),
                }}
            </section>
        </div>
    }
}
