//! Cell labeling and rendering
//!
//! The cells pipeline turns a block of free-form option lines into labeled
//! markup fragments:
//!
//! ```text
//! r1. First option          →   <row label="r1">First option</row>
//! Third, no label           →   <row label="r3">Third, no label</row>
//! ```
//!
//! Labeling runs an explicit ordered list of rewrite passes over each line
//! before the label match. The order is semantic: underscore stripping has to
//! run before label matching, and the other/specify cleanup only sees single
//! underscores because the run-stripping pass already ate the long fills. Do
//! not merge or reorder the passes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A blank line sandwiched inside one logical line collapses to one newline
static EMBEDDED_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Fill-in blanks: runs of two or more underscores
static FILL_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());

/// Blank trailing an "other"/"specify" phrase; the phrase and its punctuation
/// survive, the underscores go
static OTHER_BLANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(other|specify)([:)]*)\s*_+").unwrap());

/// Explicit label: optional `r`/`ch`/`c` prefix, 1-4 alphanumerics as the
/// label, optional trailing punctuation, whitespace, then the body (which may
/// span embedded newlines)
static LABELED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:r|ch|c)?([a-zA-Z0-9]{1,4})[.:)]*\s+(?s:(.+))$").unwrap());

/// An open "other, please specify" style option, anywhere in the body
static OTHER_SPECIFY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)other.*specify").unwrap());

/// Attribute fragment attached to open "other" options
const OTHER_EXTRA: &str = r#" other="1" openSize="20" randomize="0""#;

/// One labeled option line, ready for rendering.
///
/// Constructed by [`label_lines`], consumed by [`render_cell`], never mutated
/// in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledLine {
    /// Explicit label, or the decimal rendering of the 1-based line index
    pub label: String,
    /// Cleaned body text
    pub text: String,
    /// Extra attribute fragment (leading-space prefixed), empty when absent
    pub extra: String,
}

/// Options for the cells pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellOptions {
    /// Cell tag name (`row`, `col`, `choice`, ...)
    pub tag: String,
    /// Label prefix (`r`, `c`, `ch`, ...)
    pub prefix: String,
    /// Fragment delimiter the selection is split on
    pub delimiter: String,
}

impl Default for CellOptions {
    fn default() -> Self {
        CellOptions {
            tag: "row".to_string(),
            prefix: "r".to_string(),
            delimiter: "\n".to_string(),
        }
    }
}

/// Infer label, body, and extra attributes for one raw line.
fn smart_label(line: &str, idx: usize) -> LabeledLine {
    let collapsed = EMBEDDED_BLANK.replace_all(line, "\n");
    let stripped = FILL_BLANK.replace_all(&collapsed, "");
    let cleaned = OTHER_BLANK.replace_all(&stripped, "$1$2");

    let (label, text) = match LABELED_LINE.captures(&cleaned) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (idx.to_string(), cleaned.to_string()),
    };

    let extra = if OTHER_SPECIFY.is_match(&text) {
        OTHER_EXTRA.to_string()
    } else {
        String::new()
    };

    LabeledLine { label, text, extra }
}

/// Split `text` on `delimiter` and label every fragment in input order.
///
/// Empty fragments are kept (they become empty-bodied cells). Duplicate
/// labels pass through unvalidated; the authoring tool reports collisions
/// downstream.
pub fn label_lines(text: &str, delimiter: &str) -> Vec<LabeledLine> {
    text.split(delimiter)
        .enumerate()
        .map(|(idx, line)| smart_label(line, idx + 1))
        .collect()
}

/// Render one labeled line as a cell fragment.
///
/// `tag` and `prefix` are not validated as markup identifiers; that is the
/// caller's contract.
pub fn render_cell(line: &LabeledLine, tag: &str, prefix: &str) -> String {
    format!(
        "  <{tag} label=\"{prefix}{label}\"{extra}>{text}</{tag}>",
        tag = tag,
        prefix = prefix,
        label = line.label,
        extra = line.extra,
        text = line.text,
    )
}

/// Render a block of labeled lines, one fragment per line, input order
pub fn render_cells(lines: &[LabeledLine], tag: &str, prefix: &str) -> String {
    lines
        .iter()
        .map(|line| render_cell(line, tag, prefix))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full cells pipeline: split, label, render
pub fn transform(text: &str, options: &CellOptions) -> String {
    let lines = label_lines(text, &options.delimiter);
    render_cells(&lines, &options.tag, &options.prefix)
}
