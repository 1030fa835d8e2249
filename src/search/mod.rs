//! Incremental search
//!
//! Literal substring search over rendered rows, driven one keystroke at a
//! time by the search prompt. Supports:
//! - Forward and backward stepping with wrap-around
//! - A transient match overlay that is undone on the next keystroke

use crate::document::Document;
use crate::key::Key;
use crate::syntax::Highlight;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Where a search landed, in character space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub row: usize,
    pub cx: usize,
}

/// Highlight of one row as it was before the match overlay
#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    hl: Vec<Highlight>,
}

/// State carried between keystrokes of one search prompt
#[derive(Debug, Default)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    #[must_use]
    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Undo any overlay and forget the search position
    pub fn reset(&mut self, doc: &mut Document) {
        self.restore(doc);
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    /// React to one prompt keystroke with the current `query`.
    ///
    /// Enter and Escape end the search. Arrows step through matches without
    /// changing the query; any other key restarts from the top.
    pub fn on_key(&mut self, doc: &mut Document, query: &[u8], key: Key) -> Option<SearchMatch> {
        self.restore(doc);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return None;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }

        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        if query.is_empty() {
            return None;
        }

        let found = self.scan(doc, query);
        debug!(target: "search", query = %String::from_utf8_lossy(query), ?found, "step");
        found
    }

    /// Visit every row at most once, starting after the last match
    fn scan(&mut self, doc: &mut Document, query: &[u8]) -> Option<SearchMatch> {
        let n = doc.num_rows();
        let mut current = self.last_match;

        for _ in 0..n {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(c), SearchDirection::Forward) => (c + 1) % n,
                (Some(c), SearchDirection::Backward) if c == 0 || c >= n => n - 1,
                (Some(c), SearchDirection::Backward) => c - 1,
            };
            current = Some(next);

            let row = doc.row(next)?;
            let Some(rx) = find(row.render(), query) else {
                continue;
            };
            let cx = row.rx_to_cx(rx);

            self.last_match = Some(next);
            if let Some(hl) = doc.highlight_mut(next) {
                self.saved = Some(SavedHighlight {
                    row: next,
                    hl: hl.to_vec(),
                });
                hl[rx..rx + query.len()].fill(Highlight::Match);
            }
            return Some(SearchMatch { row: next, cx });
        }
        None
    }

    fn restore(&mut self, doc: &mut Document) {
        if let Some(saved) = self.saved.take() {
            if let Some(hl) = doc.highlight_mut(saved.row) {
                if hl.len() == saved.hl.len() {
                    hl.copy_from_slice(&saved.hl);
                }
            }
        }
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`
#[must_use]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
