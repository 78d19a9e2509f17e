//! Build option flags
//!
//! A closed record of booleans that parameterize a template render. The
//! renderer never mutates an `OptionSet`; each flag independently gates
//! its section of the generated document.

use serde::{Deserialize, Serialize};

/// Boolean build options applied during rendering.
///
/// The interactive default enables every flag. A flag absent from a
/// decoded payload is treated as disabled, matching the renderer's
/// "absent means off" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSet {
    /// Cache dependencies between runs.
    #[serde(default)]
    pub cache: bool,

    /// Include a test-execution step.
    #[serde(default)]
    pub tests: bool,

    /// Include production optimization / cleanup steps.
    #[serde(default)]
    pub optimize: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            cache: true,
            tests: true,
            optimize: true,
        }
    }
}

impl OptionSet {
    /// All flags enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self::default()
    }

    /// All flags disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            cache: false,
            tests: false,
            optimize: false,
        }
    }

    /// Sets the `cache` flag.
    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Sets the `tests` flag.
    #[must_use]
    pub fn with_tests(mut self, tests: bool) -> Self {
        self.tests = tests;
        self
    }

    /// Sets the `optimize` flag.
    #[must_use]
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let options = OptionSet::default();
        assert!(options.cache);
        assert!(options.tests);
        assert!(options.optimize);
    }

    #[test]
    fn test_absent_flag_decodes_as_disabled() {
        let options: OptionSet = serde_json::from_str("{\"cache\":true}").unwrap();
        assert!(options.cache);
        assert!(!options.tests);
        assert!(!options.optimize);
    }

    #[test]
    fn test_builder_setters() {
        let options = OptionSet::disabled().with_tests(true);
        assert!(!options.cache);
        assert!(options.tests);
        assert!(!options.optimize);
    }
}
