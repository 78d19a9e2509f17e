//! Interactive generation session
//!
//! Holds the current selection and document and keeps them consistent:
//! every selection mutation re-normalizes the framework and re-renders.
//! A viewport edit overrides the rendered document until the next
//! selection mutation. When a mutation lands on an unregistered triple
//! the selection still moves, but the previous document is left in place
//! and the error is returned for the boundary to surface as a notice.

use crate::infrastructure::store::{ConfigDraft, ConfigRecord, ConfigStore};
use crate::templates;
use crate::workflow::errors::GeneratorError;
use crate::workflow::keys::{Framework, Language, Platform};
use crate::workflow::options::OptionSet;
use crate::workflow::selection::Selection;
use tracing::debug;

/// Single-user generation session.
#[derive(Debug, Clone)]
pub struct Session {
    selection: Selection,
    document: Option<String>,
    edited: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session on the default selection, rendered eagerly.
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self {
            selection: Selection::default(),
            document: None,
            edited: false,
        };
        // The default triple is registered, so this cannot miss; an empty
        // viewport is the worst case if the catalogue ever shrinks.
        if let Err(err) = session.regenerate() {
            debug!(%err, "initial render failed");
        }
        session
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current document, if any render or edit has produced one.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// True while a viewport edit overrides the last render.
    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Switches the language, normalizing the framework for the new pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] when the resulting
    /// triple has no template; the previous document is left untouched.
    pub fn set_language(&mut self, language: Language) -> Result<(), GeneratorError> {
        self.selection.language = language;
        self.selection.normalize();
        self.regenerate()
    }

    /// Switches the platform, normalizing the framework for the new pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] when the resulting
    /// triple has no template; the previous document is left untouched.
    pub fn set_platform(&mut self, platform: Platform) -> Result<(), GeneratorError> {
        self.selection.platform = platform;
        self.selection.normalize();
        self.regenerate()
    }

    /// Switches the framework. An illegal choice normalizes away.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] when the resulting
    /// triple has no template; the previous document is left untouched.
    pub fn set_framework(&mut self, framework: Framework) -> Result<(), GeneratorError> {
        self.selection.framework = framework;
        self.selection.normalize();
        self.regenerate()
    }

    /// Replaces the option flags.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] when the current
    /// triple has no template; the previous document is left untouched.
    pub fn set_options(&mut self, options: OptionSet) -> Result<(), GeneratorError> {
        self.selection.options = options;
        self.regenerate()
    }

    /// Accepts a viewport edit as the authoritative document.
    pub fn edit(&mut self, document: impl Into<String>) {
        self.document = Some(document.into());
        self.edited = true;
    }

    /// Snapshots the current selection and document into the store.
    ///
    /// # Errors
    ///
    /// Propagates the store's failure; the in-memory state is unaffected.
    pub fn save(&self, store: &dyn ConfigStore) -> Result<ConfigRecord, GeneratorError> {
        let draft = ConfigDraft::new(self.selection).with_workflow(self.document.clone());
        Ok(store.insert(draft)?)
    }

    /// Restores a stored snapshot.
    ///
    /// A stored workflow becomes the current document verbatim; without
    /// one the selection is re-rendered.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] when the record has
    /// no stored workflow and its triple is no longer registered.
    pub fn load(&mut self, record: &ConfigRecord) -> Result<(), GeneratorError> {
        self.selection = record.selection();
        match record.workflow.clone() {
            Some(workflow) => {
                self.document = Some(workflow);
                self.edited = true;
                Ok(())
            }
            None => self.regenerate(),
        }
    }

    fn regenerate(&mut self) -> Result<(), GeneratorError> {
        let document = templates::render(&self.selection)?;
        debug!(
            language = %self.selection.language,
            platform = %self.selection.platform,
            framework = %self.selection.framework,
            bytes = document.len(),
            "rendered workflow"
        );
        self.document = Some(document);
        self.edited = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    #[test]
    fn test_new_session_renders_default_selection() {
        let session = Session::new();
        assert_eq!(session.selection().language, Language::Python);
        assert_eq!(session.selection().framework, Framework::Flask);
        let doc = session.document().unwrap();
        assert!(doc.contains("Deploy Flask to Azure Web App"));
    }

    #[test]
    fn test_language_switch_normalizes_framework() {
        let mut session = Session::new();
        session.set_language(Language::Docker).unwrap();
        assert_eq!(session.selection().platform, Platform::Azure);
        assert_eq!(session.selection().framework, Framework::Acr);
        assert!(session.document().unwrap().contains("Azure Container Registry"));
    }

    #[test]
    fn test_missing_template_keeps_previous_document() {
        let mut session = Session::new();
        session.set_language(Language::Docker).unwrap();
        // ecr is on docker's menu but unregistered under azure.
        let err = session.set_framework(Framework::Ecr).unwrap_err();
        assert!(matches!(err, GeneratorError::TemplateNotFound { .. }));
        assert_eq!(session.selection().framework, Framework::Ecr);
        assert!(session.document().unwrap().contains("Azure Container Registry"));
    }

    #[test]
    fn test_edit_overrides_until_next_mutation() {
        let mut session = Session::new();
        session.edit("# hand-tuned");
        assert!(session.is_edited());
        assert_eq!(session.document(), Some("# hand-tuned"));

        session.set_options(OptionSet::disabled()).unwrap();
        assert!(!session.is_edited());
        assert!(session.document().unwrap().starts_with("name:"));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut session = Session::new();
        session.edit("# edited copy");
        let store = MemoryStore::new();
        let record = session.save(&store).unwrap();

        let mut other = Session::new();
        other.set_language(Language::Go).unwrap();
        other.load(&record).unwrap();
        assert_eq!(other.selection(), session.selection());
        assert_eq!(other.document(), Some("# edited copy"));
    }

    #[test]
    fn test_load_without_workflow_rerenders() {
        let store = MemoryStore::new();
        let record = store
            .insert(ConfigDraft::new(Selection::new(
                Language::Go,
                Platform::Aws,
                Framework::Lambda,
            )))
            .unwrap();

        let mut session = Session::new();
        session.load(&record).unwrap();
        assert!(session.document().unwrap().contains("Deploy Go to AWS Lambda"));
    }
}
