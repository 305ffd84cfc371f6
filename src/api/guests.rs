//! Guest Endpoints

use gloo_net::http::Request;

use super::{read_data, ApiError, HttpApi, FETCH};
use crate::models::Guest;

impl HttpApi {
    pub(super) async fn fetch_guests(&self) -> Result<Vec<Guest>, ApiError> {
        let response = Request::get(&self.url("guests")).send().await?;
        read_data(response, FETCH).await
    }
}
