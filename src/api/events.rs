//! Event Endpoints
//!
//! Parties live under `/events`.

use gloo_net::http::Request;

use super::{ensure_ok, read_data, ApiError, HttpApi, CREATE, DELETE, FETCH};
use crate::models::{NewParty, Party};

impl HttpApi {
    pub(super) async fn fetch_events(&self) -> Result<Vec<Party>, ApiError> {
        let response = Request::get(&self.url("events")).send().await?;
        read_data(response, FETCH).await
    }

    pub(super) async fn fetch_event(&self, id: u32) -> Result<Party, ApiError> {
        let response = Request::get(&self.url(&format!("events/{}", id))).send().await?;
        read_data(response, FETCH).await
    }

    pub(super) async fn post_event(&self, party: &NewParty) -> Result<Party, ApiError> {
        let response = Request::post(&self.url("events")).json(party)?.send().await?;
        read_data(response, CREATE).await
    }

    /// The response body of a successful delete is ignored
    pub(super) async fn delete_event(&self, id: u32) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("events/{}", id))).send().await?;
        ensure_ok(response, DELETE).await?;
        Ok(())
    }
}
