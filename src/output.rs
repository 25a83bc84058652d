//! CSV serialization of the collected entries.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Entry;

/// Write the header row and one row per entry, overwriting `path`.
///
/// The title cell is a spreadsheet formula linking to the detail page.
/// `url` and `title` are substituted into the formula verbatim; a double
/// quote inside a title would break the formula for the spreadsheet even
/// though the CSV layer escapes it correctly. Known limitation.
pub fn write_csv(entries: &[Entry], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["No", "GENRE", "ARTIST", "TITLE"])?;
    for entry in entries {
        let title = format!("=HYPERLINK(\"{}\",\"{}\")", entry.url, entry.title);
        writer.write_record([&entry.number, &entry.genre, &entry.artist, &title])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
