//! Frontend Models
//!
//! Data structures matching the remote API records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Party data structure (the API calls these "events")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Join record between a guest and a party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub guest_id: u32,
    pub event_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: u32,
    pub name: String,
}

/// Body of `POST /events`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    /// Full timestamp, e.g. `2026-11-01T00:00:00.000Z`
    pub date: String,
    pub location: String,
}

/// Every API response wraps its payload in `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
