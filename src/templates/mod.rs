//! Template registry
//!
//! A statically constructed catalogue mapping a (language, platform,
//! framework) triple to a pure render function. The registry is built
//! once at first use and never mutated; registering a new combination is
//! a data edit in [`REGISTRY`], never a change to consumers.

mod common;
mod docker;
mod go;
mod java;
mod nodejs;
mod python;

use crate::workflow::{Framework, GeneratorError, Language, OptionSet, Platform, Selection};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Render function behind a registered template.
///
/// Pure: the same options value always yields byte-identical output, and
/// rendering never fails for any flag combination.
pub type TemplateFn = fn(&OptionSet) -> String;

/// Composite registry key.
pub type TemplateKey = (Language, Platform, Framework);

static REGISTRY: Lazy<AHashMap<TemplateKey, TemplateFn>> = Lazy::new(|| {
    use Framework as F;
    use Language as L;
    use Platform as P;

    let entries: [(TemplateKey, TemplateFn); 37] = [
        ((L::Python, P::Azure, F::Flask), python::azure_flask),
        ((L::Python, P::Azure, F::Django), python::azure_django),
        ((L::Python, P::Azure, F::Fastapi), python::azure_fastapi),
        ((L::Python, P::Aws, F::Flask), python::aws_flask),
        ((L::Python, P::Aws, F::Django), python::aws_django),
        ((L::Python, P::Aws, F::Fastapi), python::aws_fastapi),
        ((L::Python, P::Heroku, F::Flask), python::heroku_flask),
        ((L::Python, P::Heroku, F::Django), python::heroku_django),
        ((L::Python, P::Heroku, F::Fastapi), python::heroku_fastapi),
        ((L::Nodejs, P::Azure, F::Express), nodejs::azure_express),
        ((L::Nodejs, P::Azure, F::Nextjs), nodejs::azure_nextjs),
        ((L::Nodejs, P::Azure, F::React), nodejs::azure_react),
        ((L::Nodejs, P::Aws, F::Express), nodejs::aws_express),
        ((L::Nodejs, P::Aws, F::Nextjs), nodejs::aws_nextjs),
        ((L::Nodejs, P::Aws, F::React), nodejs::aws_react),
        ((L::Nodejs, P::Heroku, F::Express), nodejs::heroku_express),
        ((L::Nodejs, P::Heroku, F::Nextjs), nodejs::heroku_nextjs),
        ((L::Nodejs, P::Heroku, F::React), nodejs::heroku_react),
        ((L::Java, P::Azure, F::Springboot), java::azure_springboot),
        ((L::Java, P::Azure, F::Maven), java::azure_maven),
        ((L::Java, P::Azure, F::Gradle), java::azure_gradle),
        ((L::Java, P::Aws, F::Springboot), java::aws_springboot),
        ((L::Java, P::Aws, F::Maven), java::aws_maven),
        ((L::Java, P::Aws, F::Gradle), java::aws_gradle),
        ((L::Java, P::Heroku, F::Springboot), java::heroku_springboot),
        ((L::Java, P::Heroku, F::Maven), java::heroku_maven),
        ((L::Java, P::Heroku, F::Gradle), java::heroku_gradle),
        ((L::Go, P::Azure, F::Webapp), go::azure_webapp),
        ((L::Go, P::Azure, F::Containerapp), go::azure_containerapp),
        ((L::Go, P::Aws, F::Lambda), go::aws_lambda),
        ((L::Go, P::Aws, F::Ec2), go::aws_ec2),
        ((L::Go, P::Heroku, F::Webapp), go::heroku_webapp),
        ((L::Docker, P::Azure, F::Acr), docker::azure_acr),
        ((L::Docker, P::Azure, F::Containerapp), docker::azure_containerapp),
        ((L::Docker, P::Aws, F::Ecr), docker::aws_ecr),
        ((L::Docker, P::Aws, F::Ecs), docker::aws_ecs),
        ((L::Docker, P::Dockerhub, F::Build), docker::dockerhub_build),
    ];
    entries.into_iter().collect()
});

/// A registered workflow template, addressed by its triple.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    key: TemplateKey,
    render: TemplateFn,
}

impl Template {
    /// Renders the workflow document for the given options.
    #[must_use]
    pub fn render(&self, options: &OptionSet) -> String {
        (self.render)(options)
    }

    /// Language this template is registered under.
    #[must_use]
    pub fn language(&self) -> Language {
        self.key.0
    }

    /// Platform this template is registered under.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.key.1
    }

    /// Framework this template is registered under.
    #[must_use]
    pub fn framework(&self) -> Framework {
        self.key.2
    }
}

/// Looks up the template registered for a triple, if any.
///
/// An unregistered triple is an ordinary absence, not a failure: the
/// caller decides how to surface it.
#[must_use]
pub fn lookup(language: Language, platform: Platform, framework: Framework) -> Option<Template> {
    let key = (language, platform, framework);
    REGISTRY.get(&key).map(|&render| Template { key, render })
}

/// Renders the workflow for a selection in one step.
///
/// # Errors
///
/// Returns [`GeneratorError::TemplateNotFound`] when the selection's
/// triple has no registered template.
pub fn render(selection: &Selection) -> Result<String, GeneratorError> {
    lookup(selection.language, selection.platform, selection.framework)
        .map(|template| template.render(&selection.options))
        .ok_or_else(|| {
            GeneratorError::not_found(selection.language, selection.platform, selection.framework)
        })
}

/// All registered triples, in no particular order.
pub fn registered() -> impl Iterator<Item = TemplateKey> {
    REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{frameworks_for, platforms_for};

    fn step_names(doc: &str) -> Vec<&str> {
        doc.lines()
            .filter(|line| line.trim_start().starts_with("- name:"))
            .collect()
    }

    fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|step| it.any(|other| other == step))
    }

    #[test]
    fn test_registry_holds_every_catalogue_entry() {
        assert_eq!(registered().count(), 37);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        // docker's azure-scoped menu lists ecr, but no template exists
        // for that pairing, exactly like the reference catalogue.
        assert!(lookup(Language::Docker, Platform::Azure, Framework::Ecr).is_none());
        assert!(lookup(Language::Python, Platform::Dockerhub, Framework::Flask).is_none());
    }

    #[test]
    fn test_every_template_renders_valid_yaml() {
        for options in [OptionSet::enabled(), OptionSet::disabled()] {
            for (language, platform, framework) in registered() {
                let template = lookup(language, platform, framework).unwrap();
                let doc = template.render(&options);
                assert!(!doc.is_empty());
                let parsed: Result<serde_yaml::Value, _> = serde_yaml::from_str(&doc);
                assert!(
                    parsed.is_ok(),
                    "{language}/{platform}/{framework} produced invalid YAML: {:?}",
                    parsed.err()
                );
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let options = OptionSet::enabled().with_optimize(false);
        for (language, platform, framework) in registered() {
            let template = lookup(language, platform, framework).unwrap();
            assert_eq!(template.render(&options), template.render(&options));
        }
    }

    #[test]
    fn test_disabled_steps_are_subsequence_of_enabled() {
        for (language, platform, framework) in registered() {
            let template = lookup(language, platform, framework).unwrap();
            let all_on = template.render(&OptionSet::enabled());
            let all_off = template.render(&OptionSet::disabled());
            assert!(
                is_subsequence(&step_names(&all_off), &step_names(&all_on)),
                "{language}/{platform}/{framework} dropped an unconditional step"
            );
        }
    }

    #[test]
    fn test_normalization_default_renders_where_menus_agree() {
        // The first menu entry is the normalization target; outside
        // docker's azure/aws menus (whose first entries intentionally
        // lack templates for some platforms) it must always resolve.
        for language in Language::ALL {
            for &platform in platforms_for(language) {
                let first = frameworks_for(language, platform)[0];
                if language == Language::Docker && platform == Platform::Aws {
                    assert!(lookup(language, platform, first).is_none());
                } else {
                    assert!(
                        lookup(language, platform, first).is_some(),
                        "no template for default {language}/{platform}/{first}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_render_reports_the_missing_triple() {
        let selection = Selection::new(Language::Docker, Platform::Heroku, Framework::Acr);
        let err = render(&selection).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::not_found(Language::Docker, Platform::Heroku, Framework::Acr)
        );
    }
}
