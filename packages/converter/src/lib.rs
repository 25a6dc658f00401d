//! Keiho Converter - Turn Japanese statute XML into flat JSON articles.
//!
//! This crate reads a statute in the e-Gov law XML format and produces one
//! `{title, caption, text}` record per article of the main provision, ready
//! for search indexing.
//!
//! # Example
//!
//! ```
//! use keiho_converter::extract_articles_from_str;
//!
//! let xml = r#"<Law><LawBody><MainProvision>
//!   <Article>
//!     <ArticleCaption>（殺人）</ArticleCaption>
//!     <ArticleTitle>第百九十九条</ArticleTitle>
//!     <Paragraph><ParagraphSentence>
//!       <Sentence>人を殺した者は、死刑又は無期若しくは五年以上の懲役に処する。</Sentence>
//!     </ParagraphSentence></Paragraph>
//!   </Article>
//! </MainProvision></LawBody></Law>"#;
//!
//! let records = extract_articles_from_str(xml).unwrap();
//! assert_eq!(records[0].title, "第百九十九条");
//! assert_eq!(records[0].caption, "殺人");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Tag names, constants and output path validation
//! - [`types`]: Output record and input format types
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Owned element tree and annotation-free text extraction
//! - [`text`]: Whitespace and caption normalization
//! - [`extractor`]: Article extraction from statute XML
//! - [`plaintext`]: Article parsing from plain statute text
//! - [`json`]: JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod json;
pub mod plaintext;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extractor::{convert_file, extract_articles, extract_articles_from_str};

// Re-export commonly used items
pub use error::{ConverterError, Result};
pub use text::{normalize_caption, normalize_text};
pub use types::{InputFormat, Record};
