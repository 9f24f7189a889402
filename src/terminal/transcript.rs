//! Terminal transcript
//!
//! Ordered, append-only display lines. The only way to remove lines is to
//! reset the whole transcript.

/// Lines shown in the terminal view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Drop every line and leave `notice` as the only one
    pub fn reset_to(&mut self, notice: impl Into<String>) {
        self.lines.clear();
        self.lines.push(notice.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended at or after `index`
    pub fn since(&self, index: usize) -> &[String] {
        self.lines.get(index..).unwrap_or(&[])
    }
}
