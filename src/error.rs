use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a calendar refresh.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{var} env-var is missing")]
    MissingCredential { var: &'static str },
    #[error("{var} env-var is invalid ('{value}'): {reason}")]
    InvalidConfig {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("IPO calendar request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("IPO calendar request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IPO calendar response is malformed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single IPO record could not become an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("date is missing")]
    MissingDate,
    #[error("date '{value}' is not an ISO-8601 calendar date")]
    InvalidDate { value: String },
}
