//! Contract with the gobank backend
//!
//! Each [`Endpoint`] maps to one row of the backend's route table. Views never
//! build URLs themselves: they describe the call as an [`ApiRequest`] and hand
//! it to a [`Backend`].

use crate::config::Config;
use crate::error::ApiError;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    CreateAccount,
    Login,
    TransactionsHistory { id: String },
    Transfer { id: String },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::TransactionsHistory { .. } => Method::Get,
            Endpoint::CreateAccount | Endpoint::Login | Endpoint::Transfer { .. } => Method::Post,
        }
    }

    /// The account id is used as a path segment as-is
    pub fn path(&self) -> String {
        match self {
            Endpoint::CreateAccount => "/create".to_string(),
            Endpoint::Login => "/login".to_string(),
            Endpoint::TransactionsHistory { id } => format!("/account/transactions/{}", id),
            Endpoint::Transfer { id } => format!("/account/transfer/{}", id),
        }
    }
}

/// One outgoing call, fully described before it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint, body: Option<Value>) -> Self {
        ApiRequest {
            method: endpoint.method(),
            path: endpoint.path(),
            body,
        }
    }
}

/// Something able to deliver an [`ApiRequest`].
///
/// One call to `send` is one request on the wire; implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Production backend talking JSON over HTTP.
///
/// No auth header and no timeout are attached.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        HttpBackend {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        self.config.url(&request.path)
    }
}

impl Backend for HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(&request);
        tracing::debug!("{:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(decode_body(&text))
    }
}

/// JSON when possible, otherwise the raw text (the history endpoint may answer
/// with a plain-text table)
pub fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_table() {
        let id = "7".to_string();
        assert_eq!(Endpoint::CreateAccount.method(), Method::Post);
        assert_eq!(Endpoint::CreateAccount.path(), "/create");
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::Login.path(), "/login");
        let history = Endpoint::TransactionsHistory { id: id.clone() };
        assert_eq!(history.method(), Method::Get);
        assert_eq!(history.path(), "/account/transactions/7");
        let transfer = Endpoint::Transfer { id };
        assert_eq!(transfer.method(), Method::Post);
        assert_eq!(transfer.path(), "/account/transfer/7");
    }

    #[test]
    fn test_url_uses_configured_origin() {
        let backend = HttpBackend::new(Config::new("http://bank.test:9000"));
        let request = ApiRequest::new(Endpoint::Transfer { id: "42".to_string() }, None);
        assert_eq!(backend.url_for(&request), "http://bank.test:9000/account/transfer/42");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("{\"token\":\"abc\"}"), json!({"token": "abc"}));
        assert_eq!(
            decode_body("+----+\n| id |\n"),
            Value::String("+----+\n| id |\n".to_string())
        );
    }
}
