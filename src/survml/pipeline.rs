//! Pipeline selection and per-selection execution
//!
//! A transform invocation runs one selection to completion: trim, punctuation
//! normalization, then the selected pipeline. The result either fully
//! replaces the selection or the selection is left alone; there is no partial
//! output. The pipeline is a closed enum so dispatch is exhaustive at compile
//! time instead of going through a name-to-constructor lookup.

use crate::survml::cells::{self, CellOptions};
use crate::survml::error::TransformError;
use crate::survml::normalize::normalize;
use crate::survml::question::{self, QuestionOptions};

/// The two transform pipelines, with their configuration bundled in
#[derive(Debug, Clone, PartialEq)]
pub enum Pipeline {
    /// Label each line and wrap it in a cell fragment
    Cells(CellOptions),
    /// Wrap a label/title/cell block in a question element
    Question(QuestionOptions),
}

impl Pipeline {
    /// Transform one selection: trim, normalize punctuation, dispatch.
    pub fn run(&self, text: &str) -> Result<String, TransformError> {
        let cleaned = normalize(text.trim());
        match self {
            Pipeline::Cells(options) => Ok(cells::transform(&cleaned, options)),
            Pipeline::Question(options) => question::transform(&cleaned, options),
        }
    }
}
