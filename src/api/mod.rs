//! Remote API Client
//!
//! Bindings to the party planner CRUD API, organized by resource.

mod error;
mod events;
mod guests;
mod rsvps;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::models::{Envelope, Guest, NewParty, Party, Rsvp};

pub use error::ApiError;

/// Operations the planner needs from the remote API
#[allow(async_fn_in_trait)]
pub trait PartyApi {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError>;
    async fn get_party(&self, id: u32) -> Result<Party, ApiError>;
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError>;
    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError>;
    async fn create_party(&self, party: &NewParty) -> Result<Party, ApiError>;
    async fn delete_party(&self, id: u32) -> Result<(), ApiError>;
}

/// `PartyApi` over HTTP via `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

impl PartyApi for HttpApi {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError> {
        self.fetch_events().await
    }

    async fn get_party(&self, id: u32) -> Result<Party, ApiError> {
        self.fetch_event(id).await
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        self.fetch_rsvps().await
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        self.fetch_guests().await
    }

    async fn create_party(&self, party: &NewParty) -> Result<Party, ApiError> {
        self.post_event(party).await
    }

    async fn delete_party(&self, id: u32) -> Result<(), ApiError> {
        self.delete_event(id).await
    }
}

// ========================
// Response Helpers
// ========================

/// Action names carried by `ApiError::Status`
const FETCH: &str = "Fetch";
const CREATE: &str = "Create";
const DELETE: &str = "Delete";

/// Unwrap `{ "data": ... }`
pub fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Map a finished request to `ApiError::Status` unless it was 2xx.
/// `body` is only read for the error.
pub fn check_status(ok: bool, status: u16, body: String, action: &'static str) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status { action, status, body })
    }
}

async fn ensure_ok(response: Response, action: &'static str) -> Result<Response, ApiError> {
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };
    check_status(response.ok(), response.status(), body, action)?;
    Ok(response)
}

async fn read_data<T: DeserializeOwned>(response: Response, action: &'static str) -> Result<T, ApiError> {
    let response = ensure_ok(response, action).await?;
    let text = response.text().await?;
    decode_envelope(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope_list() {
        let guests: Vec<Guest> =
            decode_envelope(r#"{"success":true,"data":[{"id":1,"name":"Ada","email":"ada@example.com"}]}"#)
                .unwrap();
        assert_eq!(guests, vec![Guest { id: 1, name: "Ada".into() }]);
    }

    #[test]
    fn test_decode_envelope_missing_data() {
        let result: Result<Party, _> = decode_envelope(r#"{"success":false,"error":"not found"}"#);
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_check_status_passes_success() {
        assert_eq!(check_status(true, 200, String::new(), FETCH), Ok(()));
        assert_eq!(check_status(true, 201, String::new(), CREATE), Ok(()));
    }

    #[test]
    fn test_delete_with_empty_body_succeeds() {
        assert_eq!(check_status(true, 204, String::new(), DELETE), Ok(()));
    }

    #[test]
    fn test_check_status_keeps_code_and_body() {
        let err = check_status(false, 400, "date is required".into(), CREATE).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { action: "Create", status: 400, body: "date is required".into() }
        );
        assert_eq!(err.to_string(), "Create failed (400): date is required");

        let err = check_status(false, 500, "Internal Server Error".into(), DELETE).unwrap_err();
        assert_eq!(err.to_string(), "Delete failed (500): Internal Server Error");
    }

    #[test]
    fn test_failed_read_is_a_fetch_error() {
        let err = check_status(false, 404, r#"{"error":"not found"}"#.into(), FETCH).unwrap_err();
        assert!(matches!(err, ApiError::Status { action: "Fetch", status: 404, .. }));
    }

    #[test]
    fn test_decode_envelope_not_json() {
        let result: Result<Vec<Rsvp>, _> = decode_envelope("<html>502</html>");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
