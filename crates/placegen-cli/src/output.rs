//! CSV export of collected places.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use placegen_core::Place;

const HEADER: [&str; 5] = ["name", "address", "phone_number", "website", "rating"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";
/// Longest sanitized component, in characters.
const MAX_COMPONENT_CHARS: usize = 64;

/// Reduce user input to something safe inside a file name on any platform.
///
/// Unicode alphanumerics, `-` and `_` survive; each run of anything else
/// collapses to one `_`. Empty results become `unknown`.
pub(crate) fn sanitize_file_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut gap = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            if gap && !out.is_empty() {
                out.push('_');
            }
            gap = false;
            out.push(ch);
        } else {
            gap = true;
        }
    }

    let capped: String = out
        .trim_matches('_')
        .chars()
        .take(MAX_COMPONENT_CHARS)
        .collect();
    let trimmed = capped.trim_matches('_');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<timestamp>_place-<location>_keyword-<keyword>.csv`
pub(crate) fn output_file_name(at: &DateTime<Local>, location: &str, keyword: &str) -> String {
    format!(
        "{}_place-{}_keyword-{}.csv",
        at.format(TIMESTAMP_FORMAT),
        sanitize_file_component(location),
        sanitize_file_component(keyword),
    )
}

/// Write `places` as CSV to a new file `output_dir/file_name`, creating the
/// directory if needed. The header row is always written, even with no
/// places.
///
/// # Errors
///
/// Returns an error if the file already exists, or if the directory or file
/// cannot be created or written.
pub(crate) fn write_places(
    output_dir: &Path,
    file_name: &str,
    places: &[Place],
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    let path = output_dir.join(file_name);
    // Never overwrite an earlier export that landed on the same name.
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(HEADER)?;
    for place in places {
        writer.serialize(place)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
