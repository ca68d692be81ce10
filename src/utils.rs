use crate::errors::KafkaUrlError;
use crate::KAFKA_URL_SCHEME;

const SCHEME_SEPARATOR: &str = "://";
const PATH_DELIMITER: char = '/';
const GROUP_DELIMITER: char = '@';
const BROKER_DELIMITER: char = ',';

/// Strips the `kafka://` prefix, returning what follows it.
///
/// # Arguments
///
/// * `input` - The whole connection string, used verbatim in the error.
pub(crate) fn strip_scheme(input: &str) -> Result<&str, KafkaUrlError> {
    input
        .strip_prefix(KAFKA_URL_SCHEME)
        .and_then(|rest| rest.strip_prefix(SCHEME_SEPARATOR))
        .ok_or_else(|| KafkaUrlError::InvalidScheme(input.to_string()))
}

/// Splits on the first `/` into `(authority, path)`.
///
/// The path is empty if there is no `/`.
pub(crate) fn split_authority(rest: &str) -> (&str, &str) {
    rest.split_once(PATH_DELIMITER).unwrap_or((rest, ""))
}

/// Splits the authority on the first `@` into `(group, broker_list)`.
///
/// # Arguments
///
/// * `authority` - Everything between `kafka://` and the first `/`.
/// * `input` - The whole connection string, used verbatim in the error.
pub(crate) fn parse_group<'a>(authority: &'a str, input: &str) -> Result<(Option<String>, &'a str), KafkaUrlError> {
    match authority.split_once(GROUP_DELIMITER) {
        None => Ok((None, authority)),
        Some(("", _)) => Err(KafkaUrlError::EmptyGroup(input.to_string())),
        Some((group, broker_list)) => Ok((Some(group.to_string()), broker_list)),
    }
}

/// Splits the broker list on `,`, keeping every segment literally and in order.
///
/// # Arguments
///
/// * `broker_list` - The authority, minus the group (if any).
/// * `input` - The whole connection string, used verbatim in the error.
pub(crate) fn parse_brokers(broker_list: &str, input: &str) -> Result<Vec<String>, KafkaUrlError> {
    if broker_list.is_empty() {
        return Err(KafkaUrlError::MissingBroker(input.to_string()));
    }

    Ok(broker_list.split(BROKER_DELIMITER).map(String::from).collect())
}

/// Returns the topic, or `None` if the path is empty or made only of `/`.
pub(crate) fn parse_topic(path: &str) -> Option<String> {
    if path.chars().all(|c| c == PATH_DELIMITER) {
        None
    } else {
        Some(path.to_string())
    }
}

/// Used in unit tests to verify type is Thread Safe and Async/Await Safe.
///
/// It enforces that the given type implements the following standard traits:
///
/// * `std::marker::Sized`: type has a constant size known at compile time
/// * `std::marker::Send`: type is safe to send to another thread
/// * `std::marker::Sync`: type is Sync if it is safe to share between threads;
///   type can be Sync if and only if a reference to it is Send
/// * `std::marker::Unpin`: type can be safely moved after pinning
#[cfg(test)]
pub(crate) fn is_thread_safe<T: Sized + Send + Sync + Unpin>() {}
