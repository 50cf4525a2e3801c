use thiserror::Error;

/// Failure of a call to the gobank backend.
///
/// The views treat every variant the same way: the error is logged and the
/// screen stays as it was.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS failure, aborted fetch...
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },

    /// Body did not have the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 400,
            body: "{\"error\":\"Invalid ID format\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend answered 400: {\"error\":\"Invalid ID format\"}"
        );
    }
}
