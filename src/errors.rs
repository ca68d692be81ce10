use thiserror::Error;

/// Possible errors produced while parsing a [`KafkaUrl`](crate::KafkaUrl).
///
/// Each variant carries the offending input, so that callers can produce a diagnostic.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum KafkaUrlError {
    #[error("Invalid scheme: expected 'kafka://' prefix in '{0}'")]
    InvalidScheme(String),

    #[error("No broker found in '{0}': at least one is required")]
    MissingBroker(String),

    #[error("Empty group before '@' in '{0}'")]
    EmptyGroup(String),
}
