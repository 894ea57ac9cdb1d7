//! Configuration constants and validation functions for the review pipeline.

use std::path::Path;

use crate::error::{ReviewError, Result};

/// Element id of the regulation body on law.moea.gov.tw pages.
pub const BODY_CONTAINER_ID: &str = "ctl00_cp_content_divContent";

/// Minimum clause length in characters.
///
/// Shorter spans are marker noise, typically table-of-contents fragments.
pub const MIN_CLAUSE_CHARS: usize = 10;

/// Charset assumed for markup parts that do not declare one.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Extension of the generated review artifact.
pub const ARTIFACT_EXTENSION: &str = "html";

/// File stem used when the regulation title is empty.
pub const FALLBACK_TITLE: &str = "regulation";

/// Input extensions accepted for archived pages.
pub const ARCHIVE_EXTENSIONS: &[&str] = &["mhtml", "mht"];

/// Characters that cannot appear in a suggested file name.
const RESERVED_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validate that the input is an existing archived-page file.
///
/// # Examples
/// ```
/// use regelrecht_review::config::validate_input_path;
///
/// assert!(validate_input_path(std::path::Path::new("missing.mhtml")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReviewError::InvalidInput(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ReviewError::InvalidInput(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !ARCHIVE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ReviewError::InvalidInput(format!(
            "Expected an .mhtml archive, got: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate that an output directory exists and is a directory.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReviewError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", path.display()),
        )));
    }
    if !path.is_dir() {
        return Err(ReviewError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", path.display()),
        )));
    }
    Ok(())
}

/// Build the suggested artifact file name from a regulation title.
///
/// Reserved path characters and control characters become `_`; an empty
/// title falls back to [`FALLBACK_TITLE`].
///
/// # Examples
/// ```
/// use regelrecht_review::config::artifact_file_name;
///
/// assert_eq!(artifact_file_name("測試法"), "測試法.html");
/// assert_eq!(artifact_file_name("a/b"), "a_b.html");
/// assert_eq!(artifact_file_name("  "), "regulation.html");
/// ```
pub fn artifact_file_name(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || RESERVED_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let stem = if stem.is_empty() {
        FALLBACK_TITLE
    } else {
        stem.as_str()
    };
    format!("{stem}.{ARTIFACT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(artifact_file_name("電業法"), "電業法.html");
        assert_eq!(artifact_file_name(" 電業法 "), "電業法.html");
        assert_eq!(artifact_file_name(""), "regulation.html");
    }

    #[test]
    fn test_artifact_file_name_replaces_reserved() {
        assert_eq!(artifact_file_name("a\\b:c*d?"), "a_b_c_d_.html");
        assert_eq!(artifact_file_name("x\ty"), "x_y.html");
        assert_eq!(artifact_file_name("<法>|\"規\""), "_法___規_.html");
    }

    #[test]
    fn test_validate_input_path() {
        let dir = tempdir().unwrap();

        let archive = dir.path().join("law.mhtml");
        std::fs::write(&archive, b"").unwrap();
        assert!(validate_input_path(&archive).is_ok());

        let upper = dir.path().join("law.MHT");
        std::fs::write(&upper, b"").unwrap();
        assert!(validate_input_path(&upper).is_ok());

        let html = dir.path().join("law.html");
        std::fs::write(&html, b"").unwrap();
        assert!(validate_input_path(&html).is_err());

        assert!(validate_input_path(dir.path()).is_err());
        assert!(validate_input_path(&dir.path().join("missing.mhtml")).is_err());
    }

    #[test]
    fn test_validate_output_dir() {
        let dir = tempdir().unwrap();
        assert!(validate_output_dir(dir.path()).is_ok());

        let file = dir.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();
        assert!(validate_output_dir(&file).is_err());
        assert!(validate_output_dir(&dir.path().join("nope")).is_err());
    }
}
