use serde::Deserialize;
use tracing::warn;

use crate::client::{ClientSetting, FactClient};
use crate::error::Result;

pub const NO_FACT: &str = "No fact found";

pub const ERROR_PREFIX: &str = "Error fetching fact: ";

/// The part of the response body we use. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub text: Option<String>,
}

/// Turns a fetch outcome into the line shown to the user.
pub fn describe(result: Result<Fact>) -> String {
    match result {
        Ok(fact) => fact.text.unwrap_or_else(|| NO_FACT.to_string()),
        Err(e) => format!("{ERROR_PREFIX}{e}"),
    }
}

/// Fetches one fact with the default client. Failures come back as text.
pub fn get_random_fact() -> String {
    fetch_with(ClientSetting::default(), crate::FACT_URL)
}

/// Like [`get_random_fact`], against `url` with the given setting.
pub fn fetch_with(setting: ClientSetting, url: &str) -> String {
    let result = FactClient::with_url(setting, url).and_then(|client| client.fetch_blocking());
    if let Err(e) = &result {
        warn!(error = %e, "fact fetch failed");
    }
    describe(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactError;

    #[test]
    fn test_describe_text() {
        let fact: Fact = serde_json::from_str(r#"{"id":"1","text":"X","language":"en"}"#).unwrap();
        assert_eq!(describe(Ok(fact)), "X");
    }

    #[test]
    fn test_describe_missing_text() {
        let fact: Fact = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(describe(Ok(fact)), NO_FACT);

        let fact: Fact = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert_eq!(describe(Ok(fact)), NO_FACT);
    }

    #[test]
    fn test_describe_error() {
        let line = describe(Err(FactError::InvalidUrl("nope".to_string())));
        assert_eq!(line, "Error fetching fact: invalid URL: nope");
    }

    #[test]
    fn test_fetch_with_bad_url_is_text() {
        assert!(fetch_with(ClientSetting::default(), "::").starts_with(ERROR_PREFIX));
    }
}
