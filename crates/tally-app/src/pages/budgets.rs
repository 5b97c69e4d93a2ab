//! Monthly budget management

use leptos::prelude::*;
use leptos::task::spawn_local;

use tally_core::models::{Budget, BudgetAmount, NewBudget};

use crate::io::gateway;
use crate::session::use_session;

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this budget?")
                    .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

fn prompt_new_amount(current: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| {
                w.prompt_with_message_and_default("Enter the new budget amount:", current)
                    .ok()
            })
            .flatten()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = current;
        None
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

#[component]
pub fn Budgets() -> impl IntoView {
    let session = use_session();

    let (budgets, set_budgets) = signal(None::<Vec<Budget>>);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let (amount, set_amount) = signal(String::new());
    let (month, set_month) = signal(String::new());
    let (year, set_year) = signal(String::new());

    Effect::new({
        let session = session.clone();
        move |_| {
            reload.track();
            let session = session.clone();
            spawn_local(async move {
                match gateway(&session).list_budgets().await {
                    Ok(items) => set_budgets.set(Some(items)),
                    Err(err) => {
                        log::error!("Loading budgets failed: {err}");
                        set_error
                            .set(Some("An error occurred while loading budgets.".to_string()));
                    }
                }
            });
        }
    });

    let on_create = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let amount_value = amount.get();
            let month_value = month.get();
            let year_value = year.get();
            if amount_value.trim().is_empty()
                || month_value.trim().is_empty()
                || year_value.trim().is_empty()
            {
                set_error.set(Some("Please fill out all fields!".to_string()));
                return;
            }
            let (Ok(month_number), Ok(year_number)) =
                (month_value.parse::<u32>(), year_value.parse::<i32>())
            else {
                set_error.set(Some("Please fill out all fields!".to_string()));
                return;
            };
            let request = NewBudget {
                amount: amount_value,
                month: month_number,
                year: year_number,
            };
            let session = session.clone();
            spawn_local(async move {
                match gateway(&session).create_budget(&request).await {
                    Ok(_) => {
                        set_amount.set(String::new());
                        set_month.set(String::new());
                        set_year.set(String::new());
                        set_error.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("Creating budget failed: {err}");
                        set_error
                            .set(Some("Failed to add budget. Please try again.".to_string()));
                    }
                }
            });
        }
    };

    let on_update = {
        let session = session.clone();
        move |id: u64, current: String| {
            let Some(new_amount) = prompt_new_amount(&current) else {
                return;
            };
            let request = BudgetAmount { amount: new_amount };
            let session = session.clone();
            spawn_local(async move {
                match gateway(&session).update_budget(id, &request).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log::error!("Updating budget {id} failed: {err}");
                        set_error
                            .set(Some("Failed to update budget. Please try again.".to_string()));
                    }
                }
            });
        }
    };

    let on_delete = {
        let session = session.clone();
        move |id: u64| {
            if !confirm_delete() {
                return;
            }
            let session = session.clone();
            spawn_local(async move {
                match gateway(&session).delete_budget(id).await {
                    Ok(()) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log::error!("Deleting budget {id} failed: {err}");
                        set_error
                            .set(Some("Failed to delete budget. Please try again.".to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="budgets">
            <h1>"Budgets"</h1>
            {move || error.get().map(|msg| view! { <p class="error-msg">{msg}</p> })}

            <form on:submit=on_create.clone()>
                <label>
                    "Amount"
                    <input
                        type="number"
                        step="0.01"
                        prop:value=amount
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Month"
                    <select
                        prop:value=month
                        on:change=move |ev| set_month.set(event_target_value(&ev))
                    >
                        <option value="">"Select a month"</option>
                        {MONTH_NAMES
                            .iter()
                            .enumerate()
                            .map(|(index, name)| {
                                view! {
                                    <option value=(index + 1).to_string()>{*name}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Year"
                    <input
                        type="number"
                        prop:value=year
                        on:input=move |ev| set_year.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Add Budget"</button>
            </form>

            {move || match budgets.get() {
                Some(items) if items.is_empty() => {
                    view! { <p>"No budgets yet."</p> }.into_any()
                }
                Some(items) => {
                    let on_update = on_update.clone();
                    let on_delete = on_delete.clone();
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Month"</th>
                                    <th>"Year"</th>
                                    <th>"Amount"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|b| {
                                        let on_update = on_update.clone();
                                        let on_delete = on_delete.clone();
                                        let id = b.id;
                                        let current = b.amount.clone();
                                        view! {
                                            <tr>
                                                <td>{month_name(b.month)}</td>
                                                <td>{b.year}</td>
                                                <td>{b.amount.clone()}</td>
                                                <td>
                                                    <button on:click=move |_| {
                                                        on_update(id, current.clone())
                                                    }>"Update"</button>
                                                    <button on:click=move |_| on_delete(id)>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
                None => view! { <p>"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(8), "August");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn out_of_range_months_are_unknown() {
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }
}
