//! Core data types for the converter.

use serde::{Deserialize, Serialize};

/// One extracted article, as written to the JSON output.
///
/// Field order is significant: it is the key order in the output objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Normalized article title (e.g. "第百九十九条"). Never empty.
    pub title: String,

    /// Caption without enclosing parentheses, or empty when absent.
    pub caption: String,

    /// Normalized sentences joined by `\n`. Never empty.
    pub text: String,
}

impl Record {
    /// Create a new record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        caption: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            text: text.into(),
        }
    }
}

/// Supported input document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Structured statute XML with `MainProvision`/`Article` elements.
    #[default]
    Xml,

    /// Plain text with blank-line separated sections.
    Text,
}

impl InputFormat {
    /// Get the string value used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Text => "text",
        }
    }
}
