//! JSON writer for record collections.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::Record;

/// Serialize records as an indented JSON array.
///
/// Non-ASCII text is emitted literally, never as `\u` escapes.
///
/// # Examples
/// ```
/// use keiho_converter::json::generate_json;
/// use keiho_converter::types::Record;
///
/// let json = generate_json(&[Record::new("第一条", "", "本文。")]).unwrap();
/// assert!(json.contains(r#""title": "第一条""#));
/// ```
pub fn generate_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `writer` without a trailing newline.
pub fn write_json_to<W: Write>(records: &[Record], writer: &mut W) -> Result<()> {
    let content = generate_json(records)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Save records as a JSON file terminated by a newline.
///
/// Uses atomic write pattern: writes to a temp file next to `path`, syncs
/// to disk, then renames over the destination. The temp file is removed if
/// any step fails. Special files such as `/dev/stdout` are written directly.
pub fn save_json(records: &[Record], path: &Path) -> Result<()> {
    let mut content = generate_json(records)?;
    content.push('\n');

    if is_special_file(path) {
        fs::write(path, content.as_bytes())?;
    } else {
        let temp_file = temp_path(path);
        if let Err(e) = replace_via_temp(&temp_file, path, content.as_bytes()) {
            let _ = fs::remove_file(&temp_file);
            return Err(e.into());
        }
    }

    info!(path = %path.display(), count = records.len(), "Saved JSON");
    Ok(())
}

fn replace_via_temp(temp_file: &Path, path: &Path, content: &[u8]) -> io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.is_file() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}

/// An existing destination that is neither a regular file nor a directory.
fn is_special_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.is_file() && !meta.is_dir())
        .unwrap_or(false)
}

/// Write records to `output`, or to standard output when `None`.
pub fn write_json(records: &[Record], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => save_json(records, path),
        None => write_json_to(records, &mut io::stdout().lock()),
    }
}

/// `dir/out.json` becomes `dir/.out.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}
