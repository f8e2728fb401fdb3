use serde::Serialize;

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod telemetry;
pub mod validation;

pub use batch::{BatchProcessor, LineOutcome};
pub use client::{PostClient, Response};
pub use config::Config;
pub use error::{BatchError, LineError, ParseError, SendError, ValidationError};
pub use telemetry::LogContext;

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

/// The three fields parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// JSON body posted to the endpoint for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub body: String,
}

impl Record {
    pub fn new(id: String, title: String, body: String) -> Self {
        Self { id, title, body }
    }
}

impl Payload {
    /// Wire keys paired with their values, in serialization order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("userId", self.user_id.as_str()),
            ("title", self.title.as_str()),
            ("body", self.body.as_str()),
        ]
    }
}

impl From<Record> for Payload {
    fn from(record: Record) -> Self {
        Self {
            user_id: record.id,
            title: record.title,
            body: record.body,
        }
    }
}
