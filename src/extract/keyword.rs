//! Regex-based recognition of gettext-style calls.

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::catalog::Location;
use crate::extract::{Extractor, Observation};

/// Call keywords recognized out of the box.
pub const DEFAULT_KEYWORDS: &[&str] = &["_", "gettext", "$gettext"];

/// Extracts string literals passed as the first argument of configured
/// call keywords, e.g. `_("Save")` or `gettext('Cancel')`.
///
/// Only static single- or double-quoted literals are recognized; dynamic
/// arguments are a translation-time concern, not an extraction-time one.
pub struct KeywordExtractor {
    pattern: Regex,
}

impl KeywordExtractor {
    pub fn new(keywords: &[String]) -> Result<Self> {
        if keywords.is_empty() {
            bail!("at least one extraction keyword is required");
        }
        let alternatives = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        // Leading boundary keeps `my_gettext(` from matching `gettext(`.
        // The keyword is captured so the reported line is the call's own,
        // not the boundary character's.
        let pattern = format!(
            r#"(?:^|[^\w$.])((?:{}))\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#,
            alternatives
        );
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid extraction keywords: {:?}", keywords))?;
        Ok(Self { pattern })
    }
}

impl Extractor for KeywordExtractor {
    fn extract(&self, content: &str, path: &str) -> Result<Vec<Observation>> {
        let mut observations = Vec::new();
        for captures in self.pattern.captures_iter(content) {
            let Some(keyword) = captures.get(1) else {
                continue;
            };
            let Some(literal) = captures.get(2).or_else(|| captures.get(3)) else {
                continue;
            };
            let text = decode_js_literal(literal.as_str());
            if text.is_empty() {
                continue;
            }
            observations.push(Observation {
                text,
                location: Location::new(path, line_of(content, keyword.start())),
            });
        }
        Ok(observations)
    }
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, offset: usize) -> u32 {
    content[..offset].bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Decode JS string-literal escapes into the actual message text.
fn decode_js_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            // \' \" \\ \` and anything else: keep the escaped character
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
