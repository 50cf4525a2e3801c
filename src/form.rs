//! Form state and submission
//!
//! A form is a bag of string fields. Inputs write into it on every keystroke
//! and a submit snapshots it into exactly one request body. Nothing is
//! validated here: empty or non-numeric values go out as typed.

use crate::api::{ApiRequest, Backend, Endpoint};
use serde_json::Value;
use std::collections::BTreeMap;

pub const CREATE_ACCOUNT_FIELDS: &[&str] = &["username", "password", "email"];
pub const LOGIN_FIELDS: &[&str] = &["username", "password"];
pub const TRANSFER_FIELDS: &[&str] = &["amount", "recipientId"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    /// Every field starts out empty
    pub fn with_fields(names: &[&str]) -> Self {
        FormState {
            fields: names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    /// Change event for the input named `name`; unknown names are added
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn to_body(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

async fn submit<B: Backend>(
    backend: &B,
    request: ApiRequest,
    success: &str,
    failure: &str,
) -> SubmitOutcome {
    match backend.send(request).await {
        Ok(payload) => {
            tracing::info!("{}: {}", success, payload);
            SubmitOutcome::Succeeded
        }
        Err(e) => {
            tracing::error!("{}: {}", failure, e);
            SubmitOutcome::Failed
        }
    }
}

pub async fn submit_create_account<B: Backend>(backend: &B, form: &FormState) -> SubmitOutcome {
    let request = ApiRequest::new(Endpoint::CreateAccount, Some(form.to_body()));
    submit(
        backend,
        request,
        "Account created successfully",
        "Error creating account",
    )
    .await
}

/// The returned token, if any, is only logged; later requests stay unauthenticated.
pub async fn submit_login<B: Backend>(backend: &B, form: &FormState) -> SubmitOutcome {
    let request = ApiRequest::new(Endpoint::Login, Some(form.to_body()));
    submit(backend, request, "Login successful", "Error logging in").await
}

/// `account_id` is the sender, taken from the current URL
pub async fn submit_transfer<B: Backend>(
    backend: &B,
    account_id: &str,
    form: &FormState,
) -> SubmitOutcome {
    let endpoint = Endpoint::Transfer {
        id: account_id.to_string(),
    };
    let request = ApiRequest::new(endpoint, Some(form.to_body()));
    submit(backend, request, "Transfer successful", "Error making transfer").await
}
