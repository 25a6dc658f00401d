//! XML document tree and extraction utilities.

mod element;
mod utils;

pub use element::{Descendants, Element};
pub use utils::{extract_text_without_annotations, find_child, find_descendants};
