//! Unicode punctuation normalization
//!
//! Survey outlines pasted out of word processors carry smart quotes and long
//! dashes that the survey host rejects or mangles. This pass rewrites them to
//! the ASCII / entity spellings the host expects.
//!
//! All replacements are applied in a single combined-alternation pass, so the
//! output of one replacement is never re-scanned by another (entities are not
//! double-escaped) and the pass is idempotent on its own output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Replacement vocabulary in declaration order. The loose-ampersand rule is
/// not in this table: it must keep its matched whitespace, see [`normalize`].
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
    ("\u{201C}", "\""),
    ("\u{201D}", "\""),
    ("\u{2014}", "&amp;mdash;"),
    ("\u{2013}", "&amp;ndash;"),
];

/// Combined alternation over the vocabulary plus `&` followed by whitespace
static NORMALIZE: Lazy<Regex> = Lazy::new(|| {
    let mut arms: Vec<String> = REPLACEMENTS
        .iter()
        .map(|(pattern, _)| regex::escape(pattern))
        .collect();
    arms.push(r"&\s".to_string());
    Regex::new(&arms.join("|")).unwrap()
});

/// Rewrite smart punctuation to the spellings the survey host expects.
///
/// Total: succeeds on any input, including the empty string.
pub fn normalize(text: &str) -> String {
    NORMALIZE
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            for (pattern, replacement) in REPLACEMENTS {
                if matched == *pattern {
                    return (*replacement).to_string();
                }
            }
            // Loose ampersand: escape the `&`, keep the whitespace character
            format!("&amp;{}", &matched[1..])
        })
        .into_owned()
}
