//! Prelude module for common imports

// Re-export all workflow domain types with full paths
pub use crate::workflow::errors::{GeneratorError, StoreError};
pub use crate::workflow::keys::{Framework, Language, Platform};
pub use crate::workflow::options::OptionSet;
pub use crate::workflow::selection::{Selection, frameworks_for, platforms_for};
pub use crate::workflow::session::Session;

// Re-export the template registry surface
pub use crate::templates::{Template, TemplateFn, TemplateKey, lookup, render};

// Re-export infrastructure collaborators
pub use crate::infrastructure::share::{SharePayload, decode, encode, payload_from_url, share_url};
pub use crate::infrastructure::store::{
    ConfigDraft, ConfigRecord, ConfigStore, JsonFileStore, MAX_RECORDS, MemoryStore,
};
pub use crate::infrastructure::{Clipboard, Config, SystemClipboard, save_workflow};
