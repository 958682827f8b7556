// SPDX-License-Identifier: MPL-2.0
//! Video record supplied by the data-access layer.

use crate::error::Result;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A video as returned by the REST API. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<u32>,
}

impl Video {
    /// Parses a record from its JSON API representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::error::Error::Json) if the payload is
    /// malformed or misses a required field.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Calendar date of `created_at`, if present and RFC 3339.
    #[must_use]
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|timestamp| timestamp.date_naive())
    }
}
