use std::fs;
use std::path::Path;

use intf_model::{RawTicket, ValidationError};
use serde_json::Value;
use thiserror::Error;

/// Errors returned when reading ticket or fixture files.
#[derive(Debug, Error)]
pub enum TicketLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("unexpected ticket shape in {path}: {source}")]
    Shape {
        path: String,
        source: ValidationError,
    },
}

/// Read any JSON document, e.g. an expected payload fixture.
pub fn load_json(path: &Path) -> Result<Value, TicketLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| TicketLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TicketLoadError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Read a webhook ticket, with or without the `{"ticket": ...}` envelope.
pub fn load_ticket(path: &Path) -> Result<RawTicket, TicketLoadError> {
    let value = load_json(path)?;
    RawTicket::from_webhook(value).map_err(|source| TicketLoadError::Shape {
        path: path.display().to_string(),
        source,
    })
}
