//! # Actionforge - GitHub Actions workflow generator
//!
//! Actionforge turns a (language, platform, framework) selection and a
//! handful of boolean build options into a ready-to-commit GitHub
//! Actions deployment workflow.
//!
//! ## Quick Start
//!
//! ```
//! use actionforge::{Selection, templates};
//!
//! let workflow = templates::render(&Selection::default()).unwrap();
//! assert!(workflow.contains("jobs:"));
//! ```
//!
//! ## Features
//!
//! - **Static catalogue**: 37 templates across Python, Node.js, Java, Go
//!   and container builds, targeting Azure, AWS, Heroku and Docker Hub
//! - **Option-aware rendering**: caching, test and optimization steps
//!   toggle independently with no formatting residue
//! - **Selection normalization**: framework legality follows the full
//!   (language, platform) pair and falls back deterministically
//! - **Shareable tokens**: configurations round-trip through a URL-safe
//!   codec
//! - **History**: the last ten saved configurations, most recent first
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod templates;
pub mod workflow;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{
    Clipboard, Config, ConfigDraft, ConfigRecord, ConfigStore, JsonFileStore, MAX_RECORDS,
    MemoryStore, SharePayload, SystemClipboard, init_logging, save_workflow, share_url,
};
pub use templates::{Template, TemplateFn, TemplateKey, lookup};
pub use workflow::{
    Framework, GeneratorError, Language, OptionSet, Platform, Selection, Session, StoreError,
    frameworks_for, platforms_for,
};

/// Version of the actionforge crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
