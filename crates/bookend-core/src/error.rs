//! Error types for bookend-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed or out-of-range calendar date input. Surfaced as a client error.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Malformed business-window configuration (e.g., start hour >= end hour).
    #[error("Invalid schedule configuration: {0}")]
    InvalidConfig(String),

    /// Not a valid IANA timezone identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The external calendar collaborator failed (network/auth). The core does
    /// not retry; retries belong to the provider boundary.
    #[error("Calendar provider unavailable: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
