//! Snapshot → PO text rendering.
//!
//! `render` is a pure function: for a fixed (snapshot, metadata, locale)
//! triple the output is byte-identical across repetitions, platforms, and
//! host locale/timezone settings. The two timestamp header lines are the
//! only run-to-run variance, and both arrive as caller-supplied strings.

use crate::catalog::CatalogSnapshot;
use crate::po::escape::escape;
use crate::po::metadata::CatalogMetadata;

/// Render a snapshot as a PO catalog for one locale.
///
/// Header fields appear in fixed order; body blocks follow snapshot order
/// (messages sorted by text bytes, references sorted by path then line),
/// separated by single blank lines, with a trailing newline.
pub fn render(snapshot: &CatalogSnapshot, metadata: &CatalogMetadata, locale: &str) -> String {
    let mut out = String::new();

    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    out.push_str(&format!(
        "\"Project-Id-Version: {}\\n\"\n",
        escape(&metadata.project_id)
    ));
    out.push_str("\"Report-Msgid-Bugs-To: \\n\"\n");
    out.push_str(&format!(
        "\"POT-Creation-Date: {}\\n\"\n",
        escape(&metadata.creation_date)
    ));
    out.push_str(&format!(
        "\"PO-Revision-Date: {}\\n\"\n",
        escape(&metadata.revision_date)
    ));
    out.push_str(&format!("\"Language: {}\\n\"\n", escape(locale)));
    out.push_str("\"MIME-Version: 1.0\\n\"\n");
    out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
    out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");

    for record in &snapshot.messages {
        out.push('\n');
        for location in &record.locations {
            out.push_str(&format!("#: {}\n", location));
        }
        out.push_str(&format!("msgid \"{}\"\n", escape(&record.text)));
        out.push_str(&format!(
            "msgstr \"{}\"\n",
            escape(record.translation_for(locale))
        ));
    }

    out
}

/// Drop the two timestamp header lines.
///
/// Used to decide whether a freshly rendered catalog differs from the file
/// already on disk in anything but timestamps.
pub fn strip_timestamps(rendered: &str) -> String {
    rendered
        .lines()
        .filter(|line| {
            !line.starts_with("\"POT-Creation-Date:") && !line.starts_with("\"PO-Revision-Date:")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
