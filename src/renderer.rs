use std::io::{self, Write};

use crate::kafka_types::ConfigEntry;

/// Narrowest name column, even when there are no entries.
const MIN_NAME_WIDTH: usize = 1;

/// Sort entries by name, ascending.
///
/// Names are compared by code point (i.e. [`str`] ordering), independently of locale:
/// the result does not depend on the order the Cluster reported the entries in.
pub fn sort_entries(mut entries: Vec<ConfigEntry>) -> Vec<ConfigEntry> {
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.value.cmp(&b.value)));
    entries
}

/// Width of the name column: length (in characters) of the longest name.
pub fn name_width(entries: &[ConfigEntry]) -> usize {
    entries.iter().map(|e| e.name.chars().count()).fold(MIN_NAME_WIDTH, usize::max)
}

/// Write one `NAME = VALUE` line per entry, sorted by name, with names padded to the same width.
///
/// Values are written verbatim.
pub fn render<W: Write>(entries: Vec<ConfigEntry>, out: &mut W) -> io::Result<()> {
    let width = name_width(&entries);

    for e in sort_entries(entries) {
        writeln!(out, "{:<width$} = {}", e.name, e.value)?;
    }

    out.flush()
}
