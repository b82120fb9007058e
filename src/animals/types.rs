use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A record owned by the upstream service. Never modified client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Assigned by the upstream on creation.
    pub id: i64,
    pub name: String,
    /// ISO-8601 timestamp as sent by the upstream.
    pub created_at: String,
}

impl Animal {
    /// Creation time in local time, or the raw string if it does not parse.
    pub fn added_display(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(ts) => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
}
