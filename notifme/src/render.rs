//! Writing the rendered document to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::CliError;

/// Write `html` to `path`, creating parent directories as needed.
pub fn write_document(path: &Path, html: &str) -> Result<(), CliError> {
    let wrap = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, html).map_err(wrap)?;

    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("dist").join("nested").join("index.html");

        write_document(&path, "<!DOCTYPE html>\n<html></html>").expect("write");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn writing_into_a_file_path_fails_with_context() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("create blocker");

        let err = write_document(&blocker.join("index.html"), "x").expect_err("must fail");
        assert!(matches!(err, CliError::Write { .. }));
        assert!(err.to_string().contains("failed to write"));
    }
}
