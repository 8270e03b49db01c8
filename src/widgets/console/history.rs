//! Line history for the console.
//!
//! Invariant: the history always holds at least one line. The last line is the live line; it is
//! the only one whose input can be edited and the only one that receives output writes.

use std::iter;

use crate::core::text::utils::split_rows;

/// One prompt: the typed input plus the output written while it was live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    input: String,
    pending_output: String,
    sealed_rows: Vec<String>,
}

impl Line {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Output written since the line became live, not yet split into rows.
    pub fn pending_output(&self) -> &str {
        &self.pending_output
    }

    pub fn sealed_rows(&self) -> &[String] {
        &self.sealed_rows
    }

    /// Rows the pending output would produce if sealed now.
    pub fn pending_rows(&self) -> Vec<&str> {
        split_rows(&self.pending_output)
    }

    pub fn has_output(&self) -> bool {
        !self.pending_output.is_empty() || !self.sealed_rows.is_empty()
    }

    fn merge_output(&mut self) {
        let rows: Vec<String> = split_rows(&self.pending_output)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.sealed_rows.extend(rows);
        self.pending_output.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    sealed: Vec<Line>,
    live: Line,
}

impl History {
    /// History seeded with one live line carrying `welcome` as its pending output.
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            sealed: Vec::new(),
            live: Line {
                pending_output: welcome.into(),
                ..Line::default()
            },
        }
    }

    /// Number of lines, live line included. Never zero.
    pub fn len(&self) -> usize {
        self.sealed.len() + 1
    }

    pub fn live(&self) -> &Line {
        &self.live
    }

    /// Lines oldest first; the live line comes last.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &Line> + '_ {
        self.sealed.iter().chain(iter::once(&self.live))
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines().rev()
    }

    /// Line at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Line> {
        match index.cmp(&self.sealed.len()) {
            std::cmp::Ordering::Less => self.sealed.get(index),
            std::cmp::Ordering::Equal => Some(&self.live),
            std::cmp::Ordering::Greater => None,
        }
    }

    pub fn append_input(&mut self, ch: char) {
        self.live.input.push(ch);
    }

    /// Remove the last input character. No-op on empty input.
    pub fn backspace_input(&mut self) {
        self.live.input.pop();
    }

    pub fn write_output(&mut self, text: &str) {
        self.live.pending_output.push_str(text);
    }

    pub(crate) fn live_output_mut(&mut self) -> &mut String {
        &mut self.live.pending_output
    }

    /// Seal the live line's output into rows and append a fresh live line.
    ///
    /// Returns the input of the line that was sealed.
    pub fn seal_and_advance(&mut self) -> &str {
        let mut finished = std::mem::take(&mut self.live);
        finished.merge_output();
        self.sealed.push(finished);
        self.sealed
            .last()
            .map(|line| line.input.as_str())
            .unwrap_or_default()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(String::new())
    }
}
