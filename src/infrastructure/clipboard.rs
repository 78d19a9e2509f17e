//! Clipboard collaborator
//!
//! Fire-and-forget: a copy either lands or it does not, and the caller
//! only learns which. Failure is never fatal.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Destination for copied text.
pub trait Clipboard {
    /// Copies `text`, reporting success.
    fn copy(&self, text: &str) -> bool;
}

/// System clipboard via the first helper binary that accepts the text:
/// `pbcopy`, `wl-copy`, then `xclip`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

const HELPERS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> bool {
        for helper in HELPERS {
            if pipe_to(helper, text) {
                return true;
            }
        }
        debug!("no clipboard helper accepted the text");
        false
    }
}

fn pipe_to(command: &[&str], text: &str) -> bool {
    let Some((program, args)) = command.split_first() else {
        return false;
    };
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let Ok(mut child) = spawned else {
        return false;
    };
    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }
    matches!(child.wait(), Ok(status) if status.success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&self, text: &str) -> bool {
            self.copied.borrow_mut().push(text.to_string());
            true
        }
    }

    #[test]
    fn test_trait_reports_success() {
        let clipboard = RecordingClipboard {
            copied: RefCell::new(Vec::new()),
        };
        assert!(clipboard.copy("token"));
        assert_eq!(clipboard.copied.borrow().as_slice(), ["token"]);
    }

    #[test]
    fn test_unknown_helper_fails_quietly() {
        assert!(!pipe_to(&["actionforge-no-such-helper"], "text"));
    }
}
