//! Workflow domain types and logic

pub mod errors;
pub mod keys;
pub mod options;
pub mod selection;
pub mod session;

pub use errors::{GeneratorError, StoreError};
pub use keys::{Framework, Language, Platform};
pub use options::OptionSet;
pub use selection::{Selection, frameworks_for, platforms_for};
pub use session::Session;

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::templates;
    use proptest::prelude::*;

    fn any_language() -> impl Strategy<Value = Language> {
        prop::sample::select(Language::ALL.to_vec())
    }

    fn any_platform() -> impl Strategy<Value = Platform> {
        prop::sample::select(vec![
            Platform::Azure,
            Platform::Aws,
            Platform::Heroku,
            Platform::Dockerhub,
        ])
    }

    fn any_framework() -> impl Strategy<Value = Framework> {
        prop::sample::select(vec![
            Framework::Flask,
            Framework::Django,
            Framework::Fastapi,
            Framework::Express,
            Framework::Nextjs,
            Framework::React,
            Framework::Springboot,
            Framework::Maven,
            Framework::Gradle,
            Framework::Webapp,
            Framework::Containerapp,
            Framework::Lambda,
            Framework::Ec2,
            Framework::Acr,
            Framework::Ecr,
            Framework::Ecs,
            Framework::Build,
        ])
    }

    fn any_options() -> impl Strategy<Value = OptionSet> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(cache, tests, optimize)| {
            OptionSet {
                cache,
                tests,
                optimize,
            }
        })
    }

    fn any_selection() -> impl Strategy<Value = Selection> {
        (any_language(), any_platform(), any_framework(), any_options()).prop_map(
            |(language, platform, framework, options)| {
                Selection::new(language, platform, framework).with_options(options)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(selection in any_selection()) {
            let once = selection.normalized();
            prop_assert_eq!(once.normalized(), once);
        }

        #[test]
        fn prop_normalized_framework_is_contained(selection in any_selection()) {
            let normalized = selection.normalized();
            prop_assert!(
                frameworks_for(normalized.language, normalized.platform)
                    .contains(&normalized.framework)
            );
        }

        #[test]
        fn prop_normalize_preserves_valid_selections(selection in any_selection()) {
            if selection.is_valid() {
                prop_assert_eq!(selection.normalized(), selection);
            }
        }

        #[test]
        fn prop_render_is_deterministic(selection in any_selection()) {
            if let Ok(first) = templates::render(&selection) {
                let second = templates::render(&selection).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
