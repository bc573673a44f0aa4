//! PO text → entries, for loading merge baselines.
//!
//! The parser accepts more than the serializer emits: multi-line
//! continuation strings (`msgid ""` followed by `"…"` lines), packed
//! reference lines, translator/flag comments. Anything else is a format
//! error; the session treats a malformed baseline as empty and surfaces
//! a warning.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};

use crate::catalog::{BaselineMessage, Location};
use crate::po::escape::unescape;

/// One parsed catalog entry (header excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoEntry {
    pub references: Vec<Location>,
    pub msgid: String,
    pub msgstr: String,
}

/// A parsed catalog file.
#[derive(Debug, Clone, Default)]
pub struct PoFile {
    header: BTreeMap<String, String>,
    pub entries: Vec<PoEntry>,
}

impl PoFile {
    /// A header field value, e.g. `header_field("POT-Creation-Date")`.
    pub fn header_field(&self, name: &str) -> Option<&str> {
        self.header.get(name).map(String::as_str)
    }

    /// Entries in merge-baseline form.
    pub fn baseline_messages(&self) -> Vec<BaselineMessage> {
        self.entries
            .iter()
            .map(|entry| BaselineMessage {
                text: entry.msgid.clone(),
                translation: entry.msgstr.clone(),
                locations: entry.references.clone(),
            })
            .collect()
    }
}

/// Which quoted field continuation lines currently extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Msgid,
    Msgstr,
}

/// Line-by-line parser state.
#[derive(Default)]
struct Parser {
    file: PoFile,
    references: Vec<Location>,
    msgid: Option<String>,
    msgstr: Option<String>,
    seen_header: bool,
}

impl Parser {
    /// Close the entry under construction, if any.
    fn flush(&mut self) -> Result<()> {
        match (self.msgid.take(), self.msgstr.take()) {
            (None, None) => {
                self.references.clear();
                Ok(())
            }
            (Some(msgid), Some(msgstr)) => {
                if msgid.is_empty() && !self.seen_header {
                    // First empty-msgid entry is the metadata header
                    self.seen_header = true;
                    self.file.header = parse_header(&msgstr);
                    self.references.clear();
                } else {
                    self.file.entries.push(PoEntry {
                        references: std::mem::take(&mut self.references),
                        msgid,
                        msgstr,
                    });
                }
                Ok(())
            }
            _ => bail!("incomplete entry: msgid without msgstr"),
        }
    }
}

/// Parse PO catalog text.
pub fn parse(text: &str) -> Result<PoFile> {
    let mut parser = Parser::default();
    let mut field = Field::None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.is_empty() {
            parser
                .flush()
                .with_context(|| format!("line {}", line_no))?;
            field = Field::None;
        } else if let Some(refs) = line.strip_prefix("#:") {
            // A reference line directly after msgstr starts the next entry
            if field == Field::Msgstr {
                parser
                    .flush()
                    .with_context(|| format!("line {}", line_no))?;
                field = Field::None;
            }
            parser
                .references
                .extend(refs.split_whitespace().map(parse_reference));
        } else if line.starts_with('#') {
            // Translator/flag/extracted comments are not part of the model
            continue;
        } else if let Some(rest) = line.strip_prefix("msgid ") {
            if field == Field::Msgstr {
                parser
                    .flush()
                    .with_context(|| format!("line {}", line_no))?;
            }
            if parser.msgid.is_some() {
                bail!("line {}: duplicate msgid in entry", line_no);
            }
            parser.msgid = Some(parse_quoted(rest).with_context(|| format!("line {}", line_no))?);
            field = Field::Msgid;
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            if parser.msgid.is_none() {
                bail!("line {}: msgstr without preceding msgid", line_no);
            }
            parser.msgstr = Some(parse_quoted(rest).with_context(|| format!("line {}", line_no))?);
            field = Field::Msgstr;
        } else if line.starts_with('"') {
            let chunk = parse_quoted(line).with_context(|| format!("line {}", line_no))?;
            match field {
                Field::Msgid => parser.msgid.get_or_insert_default().push_str(&chunk),
                Field::Msgstr => parser.msgstr.get_or_insert_default().push_str(&chunk),
                Field::None => bail!("line {}: continuation string outside an entry", line_no),
            }
        } else {
            bail!("line {}: unrecognized catalog line: {}", line_no, line);
        }
    }

    parser.flush().context("end of file")?;
    Ok(parser.file)
}

/// Split the header entry's msgstr into `Name: value` fields.
fn parse_header(msgstr: &str) -> BTreeMap<String, String> {
    msgstr
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Parse a `"…"` quoted chunk into its unescaped content.
fn parse_quoted(chunk: &str) -> Result<String> {
    let chunk = chunk.trim();
    if chunk.len() < 2 || !chunk.starts_with('"') || !chunk.ends_with('"') {
        bail!("expected a quoted string, found: {}", chunk);
    }
    unescape(&chunk[1..chunk.len() - 1])
}

/// Parse one `path[:line]` reference token.
fn parse_reference(token: &str) -> Location {
    match token.rsplit_once(':') {
        Some((path, line)) => match line.parse::<u32>() {
            Ok(line) => Location::new(path, line),
            Err(_) => Location::file(token),
        },
        None => Location::file(token),
    }
}
