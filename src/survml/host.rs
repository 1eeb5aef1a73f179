//! Host editor seam
//!
//! The core never touches an editor directly: a host exposes its selections
//! as text ranges and applies replacements. [`apply`] walks the selections in
//! host order; a failed selection is recorded and left untouched, and never
//! aborts the remaining selections.

use crate::survml::error::TransformError;
use crate::survml::pipeline::Pipeline;

/// A selected region, as byte offsets into the host's buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        TextRange { start, end }
    }
}

/// What a host editor must expose for transforms to run against it
pub trait SelectionHost {
    /// Current selections, in the order the host exposes them (stable,
    /// typically top-to-bottom)
    fn selections(&self) -> Vec<TextRange>;

    /// The text currently inside `range`
    fn text(&self, range: &TextRange) -> String;

    /// Replace the text inside `range`
    fn replace(&mut self, range: &TextRange, replacement: &str);
}

/// Run `pipeline` over every selection of `host`, in host order.
///
/// Returns one outcome per selection. A failure leaves that selection's text
/// unmodified; later selections still run.
pub fn apply<H: SelectionHost>(
    host: &mut H,
    pipeline: &Pipeline,
) -> Vec<Result<(), TransformError>> {
    let mut outcomes = Vec::new();
    for range in host.selections() {
        let text = host.text(&range);
        match pipeline.run(&text) {
            Ok(replacement) => {
                host.replace(&range, &replacement);
                outcomes.push(Ok(()));
            }
            Err(error) => outcomes.push(Err(error)),
        }
    }
    outcomes
}

/// In-memory host over a single string buffer.
///
/// Ranges are interpreted against the buffer as it was when the host was
/// created. Edits must arrive left to right (ascending ranges, the order
/// [`apply`] uses); the accumulated length change is carried into later
/// lookups and replacements.
#[derive(Debug, Clone)]
pub struct BufferHost {
    buffer: String,
    selections: Vec<TextRange>,
    shift: isize,
}

impl BufferHost {
    pub fn new(buffer: impl Into<String>, selections: Vec<TextRange>) -> Self {
        BufferHost {
            buffer: buffer.into(),
            selections,
            shift: 0,
        }
    }

    /// Host whose single selection spans the whole buffer
    pub fn spanning(buffer: impl Into<String>) -> Self {
        let buffer = buffer.into();
        let len = buffer.len();
        BufferHost {
            buffer,
            selections: vec![TextRange::new(0, len)],
            shift: 0,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn shifted(&self, range: &TextRange) -> (usize, usize) {
        let start = (range.start as isize + self.shift) as usize;
        let end = (range.end as isize + self.shift) as usize;
        (start, end)
    }
}

impl SelectionHost for BufferHost {
    fn selections(&self) -> Vec<TextRange> {
        self.selections.clone()
    }

    fn text(&self, range: &TextRange) -> String {
        let (start, end) = self.shifted(range);
        self.buffer[start..end].to_string()
    }

    fn replace(&mut self, range: &TextRange, replacement: &str) {
        let (start, end) = self.shifted(range);
        self.buffer.replace_range(start..end, replacement);
        self.shift += replacement.len() as isize - (end - start) as isize;
    }
}
