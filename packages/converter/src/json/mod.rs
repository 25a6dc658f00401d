//! JSON output generation for extracted records.

mod writer;

pub use writer::{generate_json, save_json, write_json, write_json_to};
