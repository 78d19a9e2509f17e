//! Workflow file export

use crate::workflow::GeneratorError;
use std::fs;
use std::path::Path;

/// Writes a rendered document to `path`.
///
/// # Errors
///
/// Returns [`GeneratorError::Download`] when the write fails; the caller
/// surfaces it as a non-fatal notice.
pub fn save_workflow(document: &str, path: &Path) -> Result<(), GeneratorError> {
    fs::write(path, document).map_err(|err| GeneratorError::Download {
        filename: path.display().to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saves_document_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("python-flask-azure.yml");
        save_workflow("name: CI\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: CI\n");
    }

    #[test]
    fn test_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.yml");
        let err = save_workflow("x", &path).unwrap_err();
        match err {
            GeneratorError::Download { filename, .. } => {
                assert!(filename.ends_with("out.yml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
