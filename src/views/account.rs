use super::FormField;
use crate::api::HttpBackend;
use crate::form::{
    CREATE_ACCOUNT_FIELDS, FormState, LOGIN_FIELDS, submit_create_account, submit_login,
};
use dioxus::prelude::*;

#[component]
pub fn CreateAccount() -> Element {
    let backend = use_context::<HttpBackend>();
    let form = use_signal(|| FormState::with_fields(CREATE_ACCOUNT_FIELDS));

    rsx! {
        form {
            onsubmit: move |event| {
                event.prevent_default();
                let backend = backend.clone();
                let snapshot = form.read().clone();
                async move {
                    submit_create_account(&backend, &snapshot).await;
                }
            },
            FormField { form, name: "username", kind: "text", placeholder: "Username" }
            FormField { form, name: "password", kind: "password", placeholder: "Password" }
            FormField { form, name: "email", kind: "email", placeholder: "Email" }
            button { r#type: "submit", "Create Account" }
        }
    }
}

#[component]
pub fn Login() -> Element {
    let backend = use_context::<HttpBackend>();
    let form = use_signal(|| FormState::with_fields(LOGIN_FIELDS));

    rsx! {
        form {
            onsubmit: move |event| {
                event.prevent_default();
                let backend = backend.clone();
                let snapshot = form.read().clone();
                async move {
                    submit_login(&backend, &snapshot).await;
                }
            },
            FormField { form, name: "username", kind: "text", placeholder: "Username" }
            FormField { form, name: "password", kind: "password", placeholder: "Password" }
            button { r#type: "submit", "Login" }
        }
    }
}
