//! Error types for workflow generation

use crate::workflow::keys::{Framework, Language, Platform};
use thiserror::Error;

/// Errors produced by the generator core and its collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The selected triple has no registered template.
    #[error("no template registered for {language}/{platform}/{framework}")]
    TemplateNotFound {
        /// Selected language.
        language: Language,
        /// Selected platform.
        platform: Platform,
        /// Selected framework.
        framework: Framework,
    },

    /// A share token failed to decode.
    #[error("invalid share token: {0}")]
    InvalidToken(String),

    /// A configuration store operation failed.
    #[error("configuration store failure: {0}")]
    Store(#[from] StoreError),

    /// Writing a workflow file failed.
    #[error("failed to write workflow to '{filename}': {reason}")]
    Download {
        /// Target file name.
        filename: String,
        /// Underlying failure.
        reason: String,
    },
}

impl GeneratorError {
    /// Builds a [`GeneratorError::TemplateNotFound`] for a triple.
    #[must_use]
    pub fn not_found(language: Language, platform: Platform, framework: Framework) -> Self {
        Self::TemplateNotFound {
            language,
            platform,
            framework,
        }
    }
}

/// Errors from the persisted configuration store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// IO error on the backing medium.
    #[error("IO error: {0}")]
    Io(String),

    /// Record (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_triple() {
        let err = GeneratorError::not_found(Language::Docker, Platform::Heroku, Framework::Acr);
        assert_eq!(err.to_string(), "no template registered for docker/heroku/acr");
    }

    #[test]
    fn test_store_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GeneratorError = StoreError::from(io).into();
        assert!(matches!(err, GeneratorError::Store(StoreError::Io(_))));
    }
}
