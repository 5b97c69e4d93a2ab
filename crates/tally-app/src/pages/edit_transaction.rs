//! Edit form for a single transaction

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use tally_core::models::{Category, NewTransaction};

use crate::io::gateway;
use crate::session::use_session;

#[component]
pub fn EditTransaction() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();

    let transaction_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    let (loaded, set_loaded) = signal(false);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (error, set_error) = signal(None::<String>);

    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (date, set_date) = signal(String::new());

    Effect::new({
        let session = session.clone();
        move |_| {
            let Some(id) = transaction_id.get() else {
                set_error.set(Some("Invalid transaction id.".to_string()));
                return;
            };
            let session = session.clone();
            spawn_local(async move {
                let client = gateway(&session);
                match client.fetch_transaction(id).await {
                    Ok(transaction) => {
                        set_amount.set(transaction.amount);
                        set_category.set(transaction.category);
                        set_description.set(transaction.description);
                        set_date.set(transaction.date);
                        set_loaded.set(true);
                    }
                    Err(err) => {
                        log::error!("Loading transaction {id} failed: {err}");
                        set_error.set(Some(
                            "An error occurred while loading the transaction.".to_string(),
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

    let on_submit = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = transaction_id.get() else {
                return;
            };
            let request = NewTransaction {
                amount: amount.get(),
                category: category.get(),
                description: description.get(),
                date: date.get(),
            };
            let session = session.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match gateway(&session).update_transaction(id, &request).await {
                    Ok(_) => navigate("/transactions", Default::default()),
                    Err(err) => {
                        log::error!("Updating transaction {id} failed: {err}");
                        set_error.set(Some(
                            "Failed to update transaction. Please try again.".to_string(),
                        ));
                    }
                }
            });
        }
    };

    view! {
        <div class="edit-transaction">
            <h1>"Edit Transaction"</h1>
            {move || error.get().map(|msg| view! { <p class="error-msg">{msg}</p> })}

            <Show when=move || loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form on:submit=on_submit.clone()>
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
                    <button type="submit">"Save Changes"</button>
                </form>
            </Show>
        </div>
    }
}
