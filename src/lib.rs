//! A library crate to parse `kafka://` connection strings.
//!
//! A connection string describes how to reach a Kafka topic: an optional consumer group,
//! one or more brokers, and an optional topic.
//!
//! ```text
//! kafka://[group@]broker1[,broker2,...][/topic]
//! ```
//!
//! Parsing is purely syntactic: brokers are not resolved nor validated as `host:port`,
//! and group and topic are carried verbatim.
//!
//! # Example
//!
//! ```
//! use kafka_url::{parse_kafka_url, KafkaUrl, KafkaUrlError};
//!
//! let url: KafkaUrl = "kafka://my-group@b1:9092,b2:9092/events".parse().unwrap();
//! assert_eq!(url.group.as_deref(), Some("my-group"));
//! assert_eq!(url.brokers, vec!["b1:9092", "b2:9092"]);
//! assert_eq!(url.topic.as_deref(), Some("events"));
//! assert_eq!(url.bootstrap_servers(), "b1:9092,b2:9092");
//!
//! let (group, brokers, topic) = parse_kafka_url("kafka://broker/").unwrap();
//! assert_eq!((group, brokers, topic), (None, vec!["broker".to_string()], None));
//!
//! assert!(matches!(
//!     parse_kafka_url("http://group@broker"),
//!     Err(KafkaUrlError::InvalidScheme(_))
//! ));
//! ```
//!
//! # Features
//!
//! * `serde`: derives `Serialize` and `Deserialize` for [`KafkaUrl`].

mod errors;
mod kafka_url;
mod utils;

pub use errors::KafkaUrlError;
pub use kafka_url::{parse_kafka_url, KafkaUrl};

/// Scheme that every connection string must start with, followed by `://`.
pub const KAFKA_URL_SCHEME: &str = "kafka";
