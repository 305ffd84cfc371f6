//! RSVP Endpoints

use gloo_net::http::Request;

use super::{read_data, ApiError, HttpApi, FETCH};
use crate::models::Rsvp;

impl HttpApi {
    pub(super) async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        let response = Request::get(&self.url("rsvps")).send().await?;
        read_data(response, FETCH).await
    }
}
