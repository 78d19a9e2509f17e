//! Infrastructure layer
//!
//! External collaborators of the generator core: persistence, the share
//! token channel, file export, clipboard, logging.

mod clipboard;
mod config;
mod download;
mod logging;
pub mod share;
pub mod store;

pub use clipboard::{Clipboard, SystemClipboard};
pub use config::Config;
pub use download::save_workflow;
pub use logging::init_logging;
pub use share::{SharePayload, decode, encode, payload_from_url, share_url};
pub use store::{ConfigDraft, ConfigRecord, ConfigStore, JsonFileStore, MAX_RECORDS, MemoryStore};
