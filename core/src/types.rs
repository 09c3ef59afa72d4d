//! Domain record for the todo API.
//!
//! # Design
//! `TodoRecord` mirrors the mock-server's schema but is defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! The remote service serializes `due` either as a plain calendar date or as
//! a full timestamp (the JSON form of a JavaScript `Date`). Both decode to a
//! `NaiveDate`; encoding always writes `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single todo record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    #[serde(with = "due_date")]
    pub due: NaiveDate,
    pub notes: String,
}

impl TodoRecord {
    /// The canned record served by `FakeTransport`.
    pub fn fixture() -> Self {
        Self {
            id: 168,
            title: "fix website".to_string(),
            due: NaiveDate::from_ymd_opt(2020, 6, 6).unwrap_or(NaiveDate::MIN),
            notes: "!do this!".to_string(),
        }
    }
}

mod due_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.date_naive())
            .map_err(|_| de::Error::custom(format!("invalid due date: {raw}")))
    }
}
