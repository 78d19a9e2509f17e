//! Share token codec
//!
//! Encodes a configuration as JSON wrapped in unpadded URL-safe base64,
//! so tokens survive URLs and clipboards untouched. Decoding is strict:
//! anything malformed comes back as a single `InvalidToken` condition,
//! never a partial payload.

use crate::workflow::{Framework, GeneratorError, Language, OptionSet, Platform, Selection};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the token in a share URL.
pub const SHARE_PARAM: &str = "config";

/// The codec's subject: a selection plus an optional document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Shared language.
    pub language: Language,
    /// Shared platform.
    pub platform: Platform,
    /// Shared framework.
    pub framework: Framework,
    /// Shared option flags; a flag absent from the token is disabled.
    #[serde(default = "OptionSet::disabled")]
    pub options: OptionSet,
    /// Shared document, omitted from the token when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
}

impl SharePayload {
    /// Payload for a selection, without the rendered document.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self {
            language: selection.language,
            platform: selection.platform,
            framework: selection.framework,
            options: selection.options,
            workflow: None,
        }
    }

    /// Attaches the rendered document to the payload.
    #[must_use]
    pub fn with_workflow(mut self, workflow: Option<String>) -> Self {
        self.workflow = workflow;
        self
    }

    /// Rebuilds the selection this payload describes.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::new(self.language, self.platform, self.framework).with_options(self.options)
    }
}

/// Encodes a payload into a printable-ASCII, URL-safe token.
#[must_use]
pub fn encode(payload: &SharePayload) -> String {
    let json =
        serde_json::to_string(payload).expect("a payload of enums, bools and strings serializes");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes a token back into its payload.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidToken`] for anything that is not the
/// exact output of [`encode`]: bad base64, bad UTF-8, bad JSON, or an
/// unknown enum key.
pub fn decode(token: &str) -> Result<SharePayload, GeneratorError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|err| GeneratorError::InvalidToken(format!("base64: {err}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|err| GeneratorError::InvalidToken(format!("utf-8: {err}")))?;
    serde_json::from_str(&json).map_err(|err| GeneratorError::InvalidToken(format!("json: {err}")))
}

/// Builds a shareable URL: `<base>?config=<token>`.
#[must_use]
pub fn share_url(base: &Url, payload: &SharePayload) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(SHARE_PARAM, &encode(payload));
    url
}

/// Extracts and decodes the payload a URL carries, if any.
///
/// A URL without the `config` parameter is `Ok(None)`; a URL with a
/// malformed one fails like [`decode`].
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidToken`] when the parameter is
/// present but malformed.
pub fn payload_from_url(url: &Url) -> Result<Option<SharePayload>, GeneratorError> {
    match url.query_pairs().find(|(key, _)| key.as_ref() == SHARE_PARAM) {
        Some((_, token)) => decode(&token).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload() -> SharePayload {
        SharePayload::new(
            Selection::new(Language::Go, Platform::Aws, Framework::Lambda)
                .with_options(OptionSet::disabled().with_tests(true)),
        )
    }

    #[test]
    fn test_round_trip() {
        let original = payload();
        assert_eq!(decode(&encode(&original)).unwrap(), original);
    }

    #[test]
    fn test_round_trip_with_workflow() {
        let original = payload().with_workflow(Some("name: CI\n".to_string()));
        assert_eq!(decode(&encode(&original)).unwrap(), original);
    }

    #[test]
    fn test_token_is_printable_ascii() {
        let token = encode(&payload().with_workflow(Some("line one\nline two\n".to_string())));
        assert!(token.chars().all(|c| c.is_ascii_graphic()));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        for token in ["", "not base64!!", "bm90IGpzb24", "e30"] {
            let err = decode(token).unwrap_err();
            assert!(
                matches!(err, GeneratorError::InvalidToken(_)),
                "token {token:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_tampered_key_is_invalid() {
        let json = "{\"language\":\"cobol\",\"platform\":\"azure\",\"framework\":\"flask\"}";
        let token = URL_SAFE_NO_PAD.encode(json);
        assert!(matches!(
            decode(&token),
            Err(GeneratorError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_missing_options_decode_disabled() {
        let json =
            "{\"language\":\"python\",\"platform\":\"azure\",\"framework\":\"flask\"}";
        let token = URL_SAFE_NO_PAD.encode(json);
        let payload = decode(&token).unwrap();
        assert_eq!(payload.options, OptionSet::disabled());
    }

    #[test]
    fn test_share_url_carries_the_token() {
        let base = Url::parse("https://actionforge.dev/").unwrap();
        let original = payload();
        let url = share_url(&base, &original);
        assert_eq!(payload_from_url(&url).unwrap(), Some(original));
    }

    #[test]
    fn test_url_without_token_is_none() {
        let url = Url::parse("https://actionforge.dev/?other=1").unwrap();
        assert_eq!(payload_from_url(&url).unwrap(), None);
    }
}
