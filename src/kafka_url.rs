use std::fmt;
use std::str::FromStr;

use crate::errors::KafkaUrlError;
use crate::utils::{parse_brokers, parse_group, parse_topic, split_authority, strip_scheme};
use crate::KAFKA_URL_SCHEME;

/// Address of a Kafka topic, as described by a `kafka://` connection string.
///
/// The connection string has the form:
///
/// ```text
/// kafka://[group@]broker1[,broker2,...][/topic]
/// ```
///
/// Every field is taken verbatim from the input: no percent-decoding, no trimming,
/// no case-folding. Brokers are opaque text, not validated as `host:port`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KafkaUrl {
    /// Consumer group, present only if the authority contains `group@`.
    pub group: Option<String>,

    /// Brokers, in order of appearance. Duplicates are preserved.
    ///
    /// Never empty when produced by [`KafkaUrl::try_from_str`].
    pub brokers: Vec<String>,

    /// Topic, present only if a non-empty path follows the broker list.
    pub topic: Option<String>,
}

impl KafkaUrl {
    /// Parses a `kafka://[group@]broker1[,broker2,...][/topic]` connection string.
    ///
    /// Parsing is all-or-nothing: either a complete [`KafkaUrl`] is returned, or an error.
    ///
    /// # Arguments
    ///
    /// * `input` - The connection string. It must start with `kafka://`, otherwise
    ///     [`KafkaUrlError::InvalidScheme`] is returned. An empty broker list results in
    ///     [`KafkaUrlError::MissingBroker`], and an `@` with no group before it in
    ///     [`KafkaUrlError::EmptyGroup`].
    pub fn try_from_str(input: &str) -> Result<KafkaUrl, KafkaUrlError> {
        let rest = strip_scheme(input)?;
        let (authority, path) = split_authority(rest);
        let (group, broker_list) = parse_group(authority, input)?;

        Ok(KafkaUrl {
            group,
            brokers: parse_brokers(broker_list, input)?,
            topic: parse_topic(path),
        })
    }

    /// Consumes this [`KafkaUrl`], returning the `(group, brokers, topic)` triple.
    pub fn into_parts(self) -> (Option<String>, Vec<String>, Option<String>) {
        (self.group, self.brokers, self.topic)
    }

    /// Brokers joined by `,`, as expected by the `bootstrap.servers` client configuration.
    pub fn bootstrap_servers(&self) -> String {
        self.brokers.join(",")
    }
}

impl FromStr for KafkaUrl {
    type Err = KafkaUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl TryFrom<&str> for KafkaUrl {
    type Error = KafkaUrlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(value)
    }
}

/// Canonical form: `kafka://[group@]broker1[,broker2,...][/topic]`.
impl fmt::Display for KafkaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KAFKA_URL_SCHEME}://")?;
        if let Some(group) = &self.group {
            write!(f, "{group}@")?;
        }
        f.write_str(&self.bootstrap_servers())?;
        if let Some(topic) = &self.topic {
            write!(f, "/{topic}")?;
        }
        Ok(())
    }
}

/// Parses a connection string into its `(group, brokers, topic)` triple.
///
/// Same as [`KafkaUrl::try_from_str`] followed by [`KafkaUrl::into_parts`].
pub fn parse_kafka_url(input: &str) -> Result<(Option<String>, Vec<String>, Option<String>), KafkaUrlError> {
    KafkaUrl::try_from_str(input).map(KafkaUrl::into_parts)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::utils::is_thread_safe;

    #[rstest]
    #[case("kafka://group@broker/topic", Some("group"), &["broker"], Some("topic"))]
    #[case("kafka://broker1,broker2/topic", None, &["broker1", "broker2"], Some("topic"))]
    #[case("kafka://group@broker1,broker2/topic", Some("group"), &["broker1", "broker2"], Some("topic"))]
    #[case("kafka://broker/topic", None, &["broker"], Some("topic"))]
    #[case("kafka://group@broker", Some("group"), &["broker"], None)]
    #[case("kafka://group@broker/", Some("group"), &["broker"], None)]
    #[case("kafka://g@b1,b2/t", Some("g"), &["b1", "b2"], Some("t"))]
    #[case("kafka://broker", None, &["broker"], None)]
    #[case("kafka://broker//", None, &["broker"], None)]
    #[case("kafka://b1,b1/t", None, &["b1", "b1"], Some("t"))]
    #[case("kafka://b1:9092,b2:9093/t", None, &["b1:9092", "b2:9093"], Some("t"))]
    #[case("kafka://g@b/a/b", Some("g"), &["b"], Some("a/b"))]
    #[case("kafka://G@B/%2Ftopic", Some("G"), &["B"], Some("%2Ftopic"))]
    fn test_parse_kafka_url(
        #[case] input: &str,
        #[case] group: Option<&str>,
        #[case] brokers: &[&str],
        #[case] topic: Option<&str>,
    ) {
        let (g, b, t) = parse_kafka_url(input).unwrap();
        assert_eq!(g.as_deref(), group);
        assert_eq!(b, brokers);
        assert_eq!(t.as_deref(), topic);
    }

    #[rstest]
    #[case("http://group@broker")]
    #[case("group@broker")]
    #[case("://group@broker")]
    #[case("kafka:group@broker")]
    #[case("")]
    fn test_invalid_scheme(#[case] input: &str) {
        assert_eq!(KafkaUrl::try_from_str(input), Err(KafkaUrlError::InvalidScheme(input.to_string())));
    }

    #[rstest]
    #[case("kafka://")]
    #[case("kafka:///topic")]
    #[case("kafka://group@/topic")]
    #[case("kafka://group@")]
    fn test_missing_broker(#[case] input: &str) {
        assert_eq!(KafkaUrl::try_from_str(input), Err(KafkaUrlError::MissingBroker(input.to_string())));
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(
            KafkaUrl::try_from_str("kafka://@broker/topic"),
            Err(KafkaUrlError::EmptyGroup("kafka://@broker/topic".to_string()))
        );
    }

    #[test]
    fn test_conversions() {
        let expected = KafkaUrl {
            group: Some("group".into()),
            brokers: vec!["b1".into(), "b2".into()],
            topic: None,
        };

        assert_eq!("kafka://group@b1,b2".parse::<KafkaUrl>(), Ok(expected.clone()));
        assert_eq!(KafkaUrl::try_from("kafka://group@b1,b2/"), Ok(expected.clone()));
        assert_eq!(expected.bootstrap_servers(), "b1,b2");
    }

    #[rstest]
    #[case("kafka://group@broker/topic", "kafka://group@broker/topic")]
    #[case("kafka://group@broker/", "kafka://group@broker")]
    #[case("kafka://broker//", "kafka://broker")]
    #[case("kafka://b1,b2", "kafka://b1,b2")]
    fn test_display(#[case] input: &str, #[case] canonical: &str) {
        assert_eq!(KafkaUrl::try_from_str(input).unwrap().to_string(), canonical);
    }

    #[rstest]
    #[case("kafka://group@broker1,broker2/topic")]
    #[case("kafka://a,b@c/t/")]
    #[case("kafka://g@b@c//t")]
    #[case("kafka://b1, b2,b1/topic")]
    fn test_format_then_parse_is_stable(#[case] input: &str) {
        let parsed = KafkaUrl::try_from_str(input).unwrap();
        let reparsed = KafkaUrl::try_from_str(&parsed.to_string()).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_types_thread_safety() {
        is_thread_safe::<KafkaUrl>();
    }
}
