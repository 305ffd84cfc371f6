//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request build error: {0}")]
    Request(String),

    /// Non-success HTTP status; `action` names the operation ("Create", "Delete", ...)
    #[error("{action} failed ({status}): {body}")]
    Status {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error("malformed response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Request(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code_and_body() {
        let err = ApiError::Status {
            action: "Create",
            status: 400,
            body: "date must be in the future".into(),
        };
        assert_eq!(err.to_string(), "Create failed (400): date must be in the future");
    }
}
