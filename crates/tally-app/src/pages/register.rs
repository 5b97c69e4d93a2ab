//! Registration form with client-side validation
//!
//! Password mismatch and picture checks happen before any network call;
//! backend field errors are flattened into one inline message.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use tally_core::models::RegisterRequest;
use tally_core::TallyError;

use crate::io::gateway;
use crate::session::use_session;

const MAX_PICTURE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;
const VALID_PICTURE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Validate a profile picture before it is accepted into the form
fn validate_picture(mime: &str, size: f64) -> Result<(), &'static str> {
    if !VALID_PICTURE_TYPES.contains(&mime) {
        return Err("Please upload a valid image file (JPEG, PNG, or JPG)");
    }
    if size > MAX_PICTURE_BYTES {
        return Err("Image size must be less than 5MB");
    }
    Ok(())
}

/// Flatten a backend error body into displayable messages
fn collect_field_errors(body: &str) -> Vec<String> {
    let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) else {
        return Vec::new();
    };
    fields
        .values()
        .flat_map(|value| match value {
            serde_json::Value::String(message) => vec![message.clone()],
            serde_json::Value::Array(messages) => messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        })
        .collect()
}

#[component]
pub fn Register() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (gender, set_gender) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (picture_name, set_picture_name) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|input| input.files()).and_then(|files| files.get(0))
        else {
            return;
        };
        match validate_picture(&file.type_(), file.size()) {
            Ok(()) => {
                set_picture_name.set(Some(file.name()));
                set_error.set(None);
            }
            Err(msg) => {
                set_picture_name.set(None);
                set_error.set(Some(msg.to_string()));
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);

        if password.get_untracked() != confirm_password.get_untracked() {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        let request = RegisterRequest {
            email: email.get_untracked(),
            phone_number: phone_number.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            gender: gender.get_untracked(),
            password: password.get_untracked(),
        };
        let session = session.clone();
        spawn_local(async move {
            match gateway(&session).register(&request).await {
                Ok(_) => {
                    set_error.set(None);
                    set_message.set(Some("Registration successful!".to_string()));
                }
                Err(TallyError::Api { body, .. }) => {
                    let errors = collect_field_errors(&body);
                    let combined = if errors.is_empty() {
                        "Registration failed. Please try again.".to_string()
                    } else {
                        errors.join(" ")
                    };
                    set_error.set(Some(combined));
                }
                Err(err) => {
                    log::error!("Registration failed: {err}");
                    set_error.set(Some("Something went wrong. Please try again.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="register">
            <h2>"Register"</h2>
            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Phone Number"
                    prop:value=phone_number
                    on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="First Name"
                    prop:value=first_name
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    required
                />
                <input
                    type="text"
                    placeholder="Last Name"
                    prop:value=last_name
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    required
                />
                <select
                    prop:value=gender
                    on:change=move |ev| set_gender.set(event_target_value(&ev))
                    required
                >
                    <option value="" disabled selected>"Select Gender"</option>
                    <option value="MALE">"Male"</option>
                    <option value="FEMALE">"Female"</option>
                    <option value="OTHER">"Other"</option>
                </select>
                <input
                    type="file"
                    accept="image/jpeg,image/png,image/jpg"
                    on:change=on_file_change
                />
                {move || picture_name.get().map(|name| view! { <span class="file-name">{name}</span> })}
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Confirm Password"
                    prop:value=confirm_password
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    required
                />
                <button type="submit">"Register"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="error-msg">{msg}</p> })}
            {move || message.get().map(|msg| view! { <p class="success-msg">{msg}</p> })}
            <p>
                "Have an account? "
                <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_picture() {
        assert!(validate_picture("image/jpeg", 1024.0).is_ok());
        assert!(validate_picture("image/png", MAX_PICTURE_BYTES).is_ok());
    }

    #[test]
    fn rejects_wrong_mime_type() {
        let err = validate_picture("application/pdf", 1024.0).unwrap_err();
        assert!(err.contains("valid image file"));
    }

    #[test]
    fn rejects_oversized_picture() {
        let err = validate_picture("image/png", MAX_PICTURE_BYTES + 1.0).unwrap_err();
        assert!(err.contains("less than 5MB"));
    }

    #[test]
    fn flattens_backend_field_errors() {
        let body = r#"{"email":["already taken"],"password":"too short"}"#;
        let mut errors = collect_field_errors(body);
        errors.sort();
        assert_eq!(errors, vec!["already taken", "too short"]);
    }

    #[test]
    fn non_object_bodies_yield_no_field_errors() {
        assert!(collect_field_errors("oops").is_empty());
        assert!(collect_field_errors(r#"["a","b"]"#).is_empty());
    }
}
