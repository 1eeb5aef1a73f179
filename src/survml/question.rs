//! Question parsing and rendering
//!
//! A question selection starts with an inline label/title header and carries
//! zero or more already-formed cell fragments:
//!
//! ```text
//! q1) Favorite color?
//!   <row label="r1">Red</row>
//!   <row label="r2">Blue</row>
//! ```
//!
//! Parsing splits the selection into label, title, and cell body at the first
//! recognizable cell-opening token; rendering wraps the three into the fixed
//! question template, injecting type-specific default attributes.

use crate::survml::error::TransformError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tag names that can open a cell fragment inside a question body
const CELL_FRAGMENT_TAGS: &str = "<row|<col|<choice|<comment|<group|<net|<exec";

/// Question header: label, optional single-digit sub-index, optional closing
/// punctuation, then the remainder of the selection (across newlines)
static QUESTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*([a-zA-Z0-9]+)(?:\.([0-9]))?\s*[.)\]]*(.*)$").unwrap());

/// First token that can open a cell fragment: a tag from the fixed set, or a
/// whitespace run followed by an inline `@` attribute line
static CELL_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{}|\s+@", CELL_FRAGMENT_TAGS)).unwrap());

/// Continuation lines that open a cell fragment, with whatever indentation
/// the author typed
static BODY_CELL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\n[ \t]*({})", CELL_FRAGMENT_TAGS)).unwrap());

/// Stray indentation before inline `@` attribute lines
static BODY_ATTR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s+@").unwrap());

/// A question selection split into its three parts.
///
/// `body` holds the cell fragments verbatim except for whitespace
/// normalization; `title` is left exactly as sliced (it may be empty or
/// whitespace-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Header label, compound `base_sub` when a sub-index was present
    pub label: String,
    pub title: String,
    pub body: String,
}

/// Options for the question pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOptions {
    /// Question element type (`radio`, `checkbox`, `text`, ...)
    pub question_type: String,
    /// Carried through from the host's command arguments; not consulted by
    /// the transform itself
    pub special: Option<String>,
}

impl Default for QuestionOptions {
    fn default() -> Self {
        QuestionOptions {
            question_type: "radio".to_string(),
            special: None,
        }
    }
}

/// Split a selection into label, title, and cell body.
///
/// The body starts at the first recognized cell-opening token; when the
/// selection contains none, the whole remainder is the title and the body is
/// empty. A selection with no recognizable header at all is rejected.
pub fn parse(text: &str) -> Result<ParsedQuestion, TransformError> {
    let caps = QUESTION_HEADER
        .captures(text)
        .ok_or(TransformError::MissingLabel)?;

    let mut label = caps[1].to_string();
    if let Some(sub) = caps.get(2) {
        label = format!("{}_{}", label, sub.as_str());
    }

    let rest = caps.get(3).map_or("", |m| m.as_str());
    let boundary = CELL_START.find(rest).map_or(rest.len(), |m| m.start());

    let title = rest[..boundary].to_string();
    let body = normalize_body(rest[boundary..].trim());

    Ok(ParsedQuestion { label, title, body })
}

/// Normalize whitespace inside the cell body: continuation cell lines get the
/// canonical two-space indent, attribute lines lose stray indentation. The
/// attribute pass runs on the re-indented text; keep the order.
fn normalize_body(body: &str) -> String {
    let reindented = BODY_CELL_LINE.replace_all(body, "\n  $1");
    BODY_ATTR_LINE.replace_all(&reindented, "\n@").into_owned()
}

/// Type-specific default attributes, one per line, two-space indented, with a
/// leading newline before the first. Unknown types get none.
fn extra_attributes(question_type: &str) -> String {
    let mut extras: Vec<&str> = Vec::new();
    if question_type == "checkbox" {
        extras.push(r#"atleast="1""#);
    }
    if matches!(question_type, "text" | "textarea" | "select") {
        extras.push(r#"optional="0""#);
    }
    if extras.is_empty() {
        String::new()
    } else {
        format!("\n  {}", extras.join("\n  "))
    }
}

/// Render a parsed question into the fixed question template.
///
/// The output is byte-exact what the authoring tool expects, trailing spaces
/// on the opening lines included.
pub fn render(question_type: &str, question: &ParsedQuestion) -> String {
    format!(
        "<{question} \n  label=\"{label}\"{extra}> \n  <title>{title}</title>\n{cells}\n</{question}>",
        question = question_type,
        label = question.label,
        extra = extra_attributes(question_type),
        title = question.title,
        cells = question.body,
    )
}

/// Full question pipeline: parse, then render with the configured type
pub fn transform(text: &str, options: &QuestionOptions) -> Result<String, TransformError> {
    let question = parse(text)?;
    Ok(render(&options.question_type, &question))
}
