//! New Party Form Model
//!
//! Field values, validation, and the create payload.

use chrono::{NaiveDate, SecondsFormat};
use thiserror::Error;

use crate::models::NewParty;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Date,
    Location,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Date => "Date",
            FormField::Location => "Location",
        }
    }
}

/// Raw input values, exactly as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartyForm {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD` from the date input
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),

    #[error("{0:?} is not a valid date")]
    InvalidDate(String),

    #[error("{date} is in the past (earliest allowed is {min})")]
    PastDate { date: NaiveDate, min: NaiveDate },
}

impl PartyForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Date => &self.date,
            FormField::Location => &self.location,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Date => self.date = value,
            FormField::Location => self.location = value,
        }
    }

    /// Validate and build the request body. `today` is the earliest allowed date.
    pub fn to_payload(&self, today: NaiveDate) -> Result<NewParty, FormError> {
        let required = |field: FormField| {
            let value = self.field(field).trim();
            if value.is_empty() {
                Err(FormError::Missing(field))
            } else {
                Ok(value.to_string())
            }
        };

        let name = required(FormField::Name)?;
        let description = required(FormField::Description)?;
        let raw_date = required(FormField::Date)?;
        let location = required(FormField::Location)?;

        let date = NaiveDate::parse_from_str(&raw_date, DATE_INPUT_FORMAT)
            .map_err(|_| FormError::InvalidDate(raw_date.clone()))?;
        if date < today {
            return Err(FormError::PastDate { date, min: today });
        }
        let timestamp = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| FormError::InvalidDate(raw_date.clone()))?
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Ok(NewParty {
            name,
            description,
            date: timestamp,
            location,
        })
    }
}

/// Value for the date input's `min` attribute
pub fn min_date_attr(today: NaiveDate) -> String {
    today.format(DATE_INPUT_FORMAT).to_string()
}
