//! Selection validity and normalization
//!
//! The legal platform set is a function of the language; the legal
//! framework set is a function of the full (language, platform) pair.
//! Normalization replaces an illegal framework with the first element of
//! the legal set, so repeated application is a no-op.

use crate::workflow::keys::{Framework, Language, Platform};
use crate::workflow::options::OptionSet;
use serde::{Deserialize, Serialize};

const DEFAULT_PLATFORMS: &[Platform] = &[Platform::Azure, Platform::Aws, Platform::Heroku];
const DOCKER_PLATFORMS: &[Platform] = &[Platform::Azure, Platform::Aws, Platform::Dockerhub];

const PYTHON_FRAMEWORKS: &[Framework] = &[Framework::Flask, Framework::Django, Framework::Fastapi];
const NODEJS_FRAMEWORKS: &[Framework] = &[Framework::Express, Framework::Nextjs, Framework::React];
const JAVA_FRAMEWORKS: &[Framework] = &[Framework::Springboot, Framework::Maven, Framework::Gradle];
const GO_FRAMEWORKS: &[Framework] = &[Framework::Webapp, Framework::Containerapp];
const GO_AWS_FRAMEWORKS: &[Framework] = &[Framework::Lambda, Framework::Ec2];
const DOCKER_FRAMEWORKS: &[Framework] = &[
    Framework::Acr,
    Framework::Ecr,
    Framework::Ecs,
    Framework::Containerapp,
];
const DOCKERHUB_FRAMEWORKS: &[Framework] = &[Framework::Build];

/// Legal deployment platforms for a language, in menu order.
#[must_use]
pub fn platforms_for(language: Language) -> &'static [Platform] {
    match language {
        Language::Docker => DOCKER_PLATFORMS,
        _ => DEFAULT_PLATFORMS,
    }
}

/// Legal frameworks for a (language, platform) pair, in menu order.
///
/// The first element is the normalization default. Go on AWS and Docker
/// on Docker Hub carry pair-specific sets; everything else depends on the
/// language alone.
#[must_use]
pub fn frameworks_for(language: Language, platform: Platform) -> &'static [Framework] {
    match (language, platform) {
        (Language::Go, Platform::Aws) => GO_AWS_FRAMEWORKS,
        (Language::Go, _) => GO_FRAMEWORKS,
        (Language::Docker, Platform::Dockerhub) => DOCKERHUB_FRAMEWORKS,
        (Language::Docker, _) => DOCKER_FRAMEWORKS,
        (Language::Python, _) => PYTHON_FRAMEWORKS,
        (Language::Nodejs, _) => NODEJS_FRAMEWORKS,
        (Language::Java, _) => JAVA_FRAMEWORKS,
    }
}

/// The user's current (language, platform, framework, options) choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Selected language.
    pub language: Language,
    /// Selected platform.
    pub platform: Platform,
    /// Selected framework.
    pub framework: Framework,
    /// Build option flags.
    #[serde(default)]
    pub options: OptionSet,
}

impl Default for Selection {
    /// The selection the interactive surface starts from.
    fn default() -> Self {
        Self::new(Language::Python, Platform::Azure, Framework::Flask)
    }
}

impl Selection {
    /// Creates a selection with default options (all flags on).
    #[must_use]
    pub fn new(language: Language, platform: Platform, framework: Framework) -> Self {
        Self {
            language,
            platform,
            framework,
            options: OptionSet::default(),
        }
    }

    /// Replaces the option flags.
    #[must_use]
    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    /// True when the framework is legal for the (language, platform) pair.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        frameworks_for(self.language, self.platform).contains(&self.framework)
    }

    /// Replaces an illegal framework with the legal set's first element.
    ///
    /// Returns `true` when the framework changed. Normalizing an already
    /// valid selection is a no-op.
    pub fn normalize(&mut self) -> bool {
        let legal = frameworks_for(self.language, self.platform);
        if legal.contains(&self.framework) {
            return false;
        }
        // Every (language, platform) pair has a non-empty framework set.
        self.framework = legal[0];
        true
    }

    /// Pure counterpart of [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Conventional export file name: `{language}-{framework}-{platform}.yml`.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}-{}-{}.yml", self.language, self.framework, self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_set_depends_on_language() {
        assert_eq!(platforms_for(Language::Python), DEFAULT_PLATFORMS);
        assert_eq!(platforms_for(Language::Docker), DOCKER_PLATFORMS);
        assert!(!platforms_for(Language::Docker).contains(&Platform::Heroku));
    }

    #[test]
    fn test_go_aws_restricts_frameworks() {
        assert_eq!(
            frameworks_for(Language::Go, Platform::Aws),
            &[Framework::Lambda, Framework::Ec2]
        );
        assert_eq!(
            frameworks_for(Language::Go, Platform::Azure),
            &[Framework::Webapp, Framework::Containerapp]
        );
        assert_eq!(
            frameworks_for(Language::Go, Platform::Heroku),
            &[Framework::Webapp, Framework::Containerapp]
        );
    }

    #[test]
    fn test_dockerhub_restricts_frameworks() {
        assert_eq!(
            frameworks_for(Language::Docker, Platform::Dockerhub),
            &[Framework::Build]
        );
        assert_eq!(
            frameworks_for(Language::Docker, Platform::Azure).first(),
            Some(&Framework::Acr)
        );
    }

    #[test]
    fn test_normalize_replaces_illegal_framework() {
        // python/azure/flask, then the language moves to docker while the
        // platform stays azure: flask is illegal there and falls back to
        // the set's first element.
        let mut selection = Selection::default();
        selection.language = Language::Docker;
        assert!(selection.normalize());
        assert_eq!(selection.framework, Framework::Acr);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut selection = Selection::new(Language::Go, Platform::Aws, Framework::Webapp);
        selection.normalize();
        let once = selection;
        assert!(!selection.normalize());
        assert_eq!(selection, once);
    }

    #[test]
    fn test_normalize_valid_selection_is_noop() {
        let selection = Selection::new(Language::Java, Platform::Heroku, Framework::Gradle);
        assert_eq!(selection.normalized(), selection);
    }

    #[test]
    fn test_normalized_framework_is_contained() {
        for language in Language::ALL {
            for &platform in platforms_for(language) {
                let selection =
                    Selection::new(language, platform, Framework::Flask).normalized();
                assert!(frameworks_for(language, platform).contains(&selection.framework));
            }
        }
    }

    #[test]
    fn test_filename_convention() {
        let selection = Selection::new(Language::Go, Platform::Aws, Framework::Lambda);
        assert_eq!(selection.filename(), "go-lambda-aws.yml");
    }
}
