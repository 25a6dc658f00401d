//! Error types for the converter.
//!
//! Every variant is fatal: a single malformed article aborts the whole run
//! so that no partial JSON is ever written.

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Input is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// An `Article` has no direct `ArticleTitle` child.
    #[error("Article #{article} has no ArticleTitle element")]
    MissingTitle {
        /// 1-based position of the article in document order.
        article: usize,
    },

    /// An `ArticleTitle` extracts to empty text.
    #[error("Article #{article} has an empty ArticleTitle")]
    EmptyTitle {
        /// 1-based position of the article in document order.
        article: usize,
    },

    /// An article has no non-empty `Sentence` after normalization.
    #[error("Article {title} has an empty body")]
    EmptyBody { title: String },

    /// The requested output location cannot be written to.
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
