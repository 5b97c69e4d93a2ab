//! Transaction list with an inline creation form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use tally_core::models::{Category, NewTransaction, Transaction};

use crate::io::gateway;
use crate::session::use_session;

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this transaction?")
                    .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[component]
pub fn Transactions() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (transactions, set_transactions) = signal(None::<Vec<Transaction>>);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (show_form, set_show_form) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (date, set_date) = signal(String::new());

    Effect::new({
        let session = session.clone();
        move |_| {
            reload.track();
            let session = session.clone();
            spawn_local(async move {
                let client = gateway(&session);
                match client.list_transactions().await {
                    Ok(items) => set_transactions.set(Some(items)),
                    Err(err) => {
                        log::error!("Loading transactions failed: {err}");
                        set_error.set(Some(
                            "An error occurred while loading transactions.".to_string(),
                        ));
                    }
                }
                match client.list_categories().await {
                    Ok(items) => set_categories.set(items),
                    Err(err) => log::error!("Loading categories failed: {err}"),
                }
            });
        }
    });

    let on_create = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let request = NewTransaction {
                amount: amount.get(),
                category: category.get(),
                description: description.get(),
                date: date.get(),
            };
            let session = session.clone();
            spawn_local(async move {
                match gateway(&session).create_transaction(&request).await {
                    Ok(_) => {
                        set_amount.set(String::new());
                        set_category.set(String::new());
                        set_description.set(String::new());
                        set_date.set(String::new());
                        set_show_form.set(false);
                        set_error.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("Creating transaction failed: {err}");
                        set_error.set(Some(
                            "Failed to add transaction. Please try again.".to_string(),
                        ));
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
                match gateway(&session).delete_transaction(id).await {
                    Ok(()) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log::error!("Deleting transaction {id} failed: {err}");
                        set_error.set(Some(
                            "Failed to delete transaction. Please try again.".to_string(),
                        ));
                    }
                }
            });
        }
    };

    view! {
        <div class="transactions">
            <h1>"Transactions"</h1>
            {move || error.get().map(|msg| view! { <p class="error-msg">{msg}</p> })}

            <button on:click=move |_| set_show_form.update(|shown| *shown = !*shown)>
                {move || if show_form.get() { "Cancel" } else { "Add Transaction" }}
            </button>

            <Show when=move || show_form.get()>
                <form on:submit=on_create.clone()>
                    <label>
                        "Amount"
                        <input
                            type="number"
                            step="0.01"
                            prop:value=amount
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Category"
                        <select
                            prop:value=category
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            required
                        >
                            <option value="">"Select a category"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        view! { <option value=c.value.clone()>{c.label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label>
                        "Description"
                        <input
                            type="text"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Date"
                        <input
                            type="date"
                            prop:value=date
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button type="submit">"Save"</button>
                </form>
            </Show>

            {move || match transactions.get() {
                Some(items) if items.is_empty() => {
                    view! { <p>"No transactions yet."</p> }.into_any()
                }
                Some(items) => {
                    let on_delete = on_delete.clone();
                    let navigate = navigate.clone();
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Category"</th>
                                    <th>"Description"</th>
                                    <th>"Amount"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|t| {
                                        let on_delete = on_delete.clone();
                                        let navigate = navigate.clone();
                                        let id = t.id;
                                        let label = if t.category_display.is_empty() {
                                            t.category.clone()
                                        } else {
                                            t.category_display.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td>{t.date}</td>
                                                <td>{label}</td>
                                                <td>{t.description}</td>
                                                <td>{t.amount}</td>
                                                <td>
                                                    <button on:click=move |_| {
                                                        navigate(
                                                            &format!("/transactions/{id}/edit"),
                                                            Default::default(),
                                                        );
                                                    }>"Edit"</button>
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
