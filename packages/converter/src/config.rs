//! Configuration constants and validation functions for the converter.

use std::path::Path;

use crate::error::{ConverterError, Result};

/// Input file used when `--input` is not given.
pub const DEFAULT_INPUT_PATH: &str = "./keiho.xml";

/// Section holding the substantive provisions of a statute.
pub const MAIN_PROVISION_TAG: &str = "MainProvision";

/// A numbered article.
pub const ARTICLE_TAG: &str = "Article";

/// Required heading of an article (e.g. "第一条").
pub const ARTICLE_TITLE_TAG: &str = "ArticleTitle";

/// Optional parenthesized caption of an article (e.g. "（目的）").
pub const ARTICLE_CAPTION_TAG: &str = "ArticleCaption";

/// A single sentence of article body text, at any depth.
pub const SENTENCE_TAG: &str = "Sentence";

/// Ruby reading annotation. Its content never appears in extracted text.
pub const RUBY_READING_TAG: &str = "Rt";

/// Body of a repealed article that is kept only as a placeholder.
pub const DELETION_MARKER: &str = "削除";

/// Parenthesis pairs stripped from captions, in the order they are tried.
pub const CAPTION_PARENTHESES: [(char, char); 2] = [('（', '）'), ('(', ')')];

/// Validate that JSON output can be written to `path`.
///
/// Checked before any input is read so that a bad destination fails fast.
///
/// # Returns
/// * `Ok(())` if the parent directory exists and `path` is not a directory
/// * `Err(ConverterError::InvalidOutputPath)` otherwise
///
/// # Examples
/// ```
/// use keiho_converter::config::validate_output_path;
///
/// let dir = std::env::temp_dir();
/// assert!(validate_output_path(&dir.join("keiho.json")).is_ok());
/// assert!(validate_output_path(&dir).is_err());
/// ```
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(ConverterError::InvalidOutputPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(ConverterError::InvalidOutputPath(format!(
                "directory does not exist: {}",
                parent.display()
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_path_in_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(&dir.path().join("out.json")).is_ok());
    }

    #[test]
    fn test_validate_output_path_relative_file() {
        assert!(validate_output_path(Path::new("out.json")).is_ok());
    }

    #[test]
    fn test_validate_output_path_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = validate_output_path(&path).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidOutputPath(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_output_path_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_output_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_caption_parentheses_order() {
        // Full-width pair is tried first
        assert_eq!(CAPTION_PARENTHESES[0], ('（', '）'));
        assert_eq!(CAPTION_PARENTHESES[1], ('(', ')'));
    }
}
