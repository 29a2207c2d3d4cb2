//! Deeplink URL parsing.

use std::collections::HashMap;

use tracing::debug;
use url::Url;

/// Host that identifies the weather feature in a deeplink.
pub const FEATURE_HOST: &str = "sensorstation";

/// Target used when the deeplink names no path segment.
pub const DEFAULT_TARGET: &str = "main";

/// Default app scheme (the part before `://`).
pub const DEFAULT_SCHEME: &str = "solingen";

/// The decoded content of a weather deeplink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeeplinkPayload {
    target: String,
    parameters: HashMap<String, String>,
}

impl DeeplinkPayload {
    /// The path segment after `sensorstation`, or `"main"`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All query parameters, percent-decoded, last duplicate wins.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

/// Parses `<scheme>://sensorstation[/<target>][?query]` deeplinks.
///
/// # Examples
///
/// ```
/// use station_server::deeplink::DeeplinkParser;
///
/// let parser = DeeplinkParser::new("solingen");
///
/// let payload = parser
///     .parse("solingen://sensorstation/detail?station=ABC123")
///     .unwrap();
/// assert_eq!(payload.target(), "detail");
/// assert_eq!(payload.parameter("station"), Some("ABC123"));
///
/// assert!(parser.parse("otherapp://foo").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DeeplinkParser {
    scheme: String,
}

impl DeeplinkParser {
    /// Create a parser accepting the given app scheme.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Whether `url` is a weather deeplink this parser understands.
    pub fn can_open(&self, url: &str) -> bool {
        self.parse(url).is_some()
    }

    /// Parse a deeplink.
    ///
    /// Returns `None` when the input is not a URL, the scheme differs from
    /// the configured one, or the host is not `sensorstation`. Callers fall
    /// back to their default action in that case.
    pub fn parse(&self, input: &str) -> Option<DeeplinkPayload> {
        let url = match Url::parse(input.trim()) {
            Ok(url) => url,
            Err(e) => {
                debug!(input, error = %e, "deeplink is not a URL");
                return None;
            }
        };

        if !url.scheme().eq_ignore_ascii_case(&self.scheme) {
            debug!(input, scheme = url.scheme(), "deeplink scheme does not match");
            return None;
        }

        if url.host_str() != Some(FEATURE_HOST) {
            debug!(input, host = ?url.host_str(), "deeplink is not for the weather feature");
            return None;
        }

        let target = url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_TARGET)
            .to_string();

        // Inserting in query order makes the last duplicate win
        let mut parameters = HashMap::new();
        for (key, value) in url.query_pairs() {
            parameters.insert(key.into_owned(), value.into_owned());
        }

        debug!(deeplink_target = %target, params = parameters.len(), "parsed deeplink");

        Some(DeeplinkPayload { target, parameters })
    }
}

impl Default for DeeplinkParser {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any matching URL yields the path segment as target
        #[test]
        fn target_roundtrip(target in "[a-z][a-z0-9]{0,11}") {
            let url = format!("solingen://sensorstation/{target}");
            let payload = DeeplinkParser::new("solingen").parse(&url).unwrap();
            prop_assert_eq!(payload.target(), target.as_str());
        }

        /// Query values come back verbatim
        #[test]
        fn parameter_roundtrip(key in "[a-z]{1,8}", value in "[A-Za-z0-9]{0,16}") {
            let url = format!("solingen://sensorstation/detail?{key}={value}");
            let payload = DeeplinkParser::new("solingen").parse(&url).unwrap();
            prop_assert_eq!(payload.parameter(&key), Some(value.as_str()));
        }

        /// Any other scheme is rejected
        #[test]
        fn foreign_scheme_rejected(scheme in "[a-z]{2,10}".prop_filter("not ours", |s| s != "solingen")) {
            let url = format!("{scheme}://sensorstation/detail?station=A");
            prop_assert!(DeeplinkParser::new("solingen").parse(&url).is_none());
        }
    }
}
