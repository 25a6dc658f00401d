//! Article extraction service that ties all components together.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{
    ARTICLE_CAPTION_TAG, ARTICLE_TAG, ARTICLE_TITLE_TAG, DELETION_MARKER, MAIN_PROVISION_TAG,
    SENTENCE_TAG,
};
use crate::error::{ConverterError, Result};
use crate::plaintext::parse_plaintext;
use crate::text::{normalize_caption, normalize_text};
use crate::types::{InputFormat, Record};
use crate::xml::{extract_text_without_annotations, find_child, find_descendants, Element};

/// Read an input file and convert it to records.
///
/// # Arguments
/// * `path` - Input document
/// * `format` - How to interpret the document
///
/// # Returns
/// Records in document order, or the first error encountered
pub fn convert_file(path: &Path, format: InputFormat) -> Result<Vec<Record>> {
    debug!(path = %path.display(), format = format.as_str(), "Reading input");
    let content = fs::read_to_string(path)?;

    let records = match format {
        InputFormat::Xml => extract_articles_from_str(&content)?,
        InputFormat::Text => parse_plaintext(&content),
    };

    info!(count = records.len(), "Extracted articles");
    Ok(records)
}

/// Parse statute XML and extract its articles.
pub fn extract_articles_from_str(xml: &str) -> Result<Vec<Record>> {
    let root = Element::parse(xml)?;
    extract_articles(&root)
}

/// Extract one record per non-deleted article under the main provision.
///
/// Articles are found at any depth below every `MainProvision` element and
/// processed in document order. The first invalid article aborts extraction.
pub fn extract_articles(root: &Element) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    let articles = main_provisions(root)
        .into_iter()
        .flat_map(|provision| find_descendants(provision, ARTICLE_TAG));

    for (index, article) in articles.enumerate() {
        if let Some(record) = extract_article(article, index + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// Build the record for a single article.
///
/// Returns `Ok(None)` for a repealed article whose first sentence is the
/// deletion marker.
fn extract_article(article: &Element, position: usize) -> Result<Option<Record>> {
    let title_element = find_child(article, ARTICLE_TITLE_TAG)
        .ok_or(ConverterError::MissingTitle { article: position })?;

    let title = normalize_text(&extract_text_without_annotations(title_element));
    if title.is_empty() {
        return Err(ConverterError::EmptyTitle { article: position });
    }

    let caption = find_child(article, ARTICLE_CAPTION_TAG)
        .map(|caption| normalize_caption(&extract_text_without_annotations(caption)))
        .unwrap_or_default();

    let sentences: Vec<String> = find_descendants(article, SENTENCE_TAG)
        .map(|sentence| normalize_text(&extract_text_without_annotations(sentence)))
        .filter(|text| !text.is_empty())
        .collect();

    match sentences.first() {
        None => return Err(ConverterError::EmptyBody { title }),
        Some(first) if first == DELETION_MARKER => {
            debug!(%title, "Skipping deleted article");
            return Ok(None);
        }
        Some(_) => {}
    }

    debug!(%title, sentences = sentences.len(), "Extracted article");
    Ok(Some(Record {
        title,
        caption,
        text: sentences.join("\n"),
    }))
}

/// Collect the outermost `MainProvision` elements below `root`.
fn main_provisions(root: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    let mut stack: Vec<&Element> = root.children.iter().rev().collect();

    while let Some(element) = stack.pop() {
        if element.has_tag(MAIN_PROVISION_TAG) {
            found.push(element);
        } else {
            stack.extend(element.children.iter().rev());
        }
    }

    found
}
