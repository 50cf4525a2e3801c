use super::FormField;
use crate::api::HttpBackend;
use crate::form::{FormState, TRANSFER_FIELDS, submit_transfer};
use dioxus::prelude::*;

// no confirmation step and no idempotency key: two clicks are two transfers
#[component]
pub fn Transfer(id: String) -> Element {
    let backend = use_context::<HttpBackend>();
    let form = use_signal(|| FormState::with_fields(TRANSFER_FIELDS));

    rsx! {
        form {
            onsubmit: move |event| {
                event.prevent_default();
                let backend = backend.clone();
                let account_id = id.clone();
                let snapshot = form.read().clone();
                async move {
                    submit_transfer(&backend, &account_id, &snapshot).await;
                }
            },
            FormField { form, name: "amount", kind: "text", placeholder: "Amount" }
            FormField { form, name: "recipientId", kind: "text", placeholder: "Recipient ID" }
            button { r#type: "submit", "Transfer" }
        }
    }
}
