//! Document rows
//! Raw characters plus the derived render and highlight forms
//!
//! ## row/ Invariants
//!
//! - `render` is always `render(chars)`; it is never edited directly.
//! - `hl.len() == render.len()` after every update.
//! - Column conversions assume one byte per screen column.

use crate::constants::TAB_STOP;
use crate::syntax::{highlight_row, Highlight, SyntaxProfile};

/// Expand tabs to the next multiple of [`TAB_STOP`]
#[must_use]
pub fn render(chars: &[u8]) -> Vec<u8> {
    let tabs = chars.iter().filter(|&&c| c == b'\t').count();
    let mut out = Vec::with_capacity(chars.len() + tabs * (TAB_STOP - 1));
    for &c in chars {
        if c == b'\t' {
            out.push(b' ');
            while out.len() % TAB_STOP != 0 {
                out.push(b' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Render width contributed by `c` when it starts at render column `rx`
fn advance(c: u8, rx: usize) -> usize {
    if c == b'\t' {
        TAB_STOP - (rx % TAB_STOP)
    } else {
        1
    }
}

/// One line of text, without its trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    chars: Vec<u8>,
    render: Vec<u8>,
    hl: Vec<Highlight>,
    open_comment: bool,
}

impl Row {
    /// Create a row with its render form computed; highlighting is left to the caller
    #[must_use]
    pub fn new(index: usize, text: &[u8]) -> Self {
        let chars = text.to_vec();
        let render = render(&chars);
        let hl = vec![Highlight::Normal; render.len()];
        Row {
            index,
            chars,
            render,
            hl,
            open_comment: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Raw characters (authoritative content)
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Tab-expanded display bytes
    #[must_use]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    #[must_use]
    pub fn highlight(&self) -> &[Highlight] {
        &self.hl
    }

    /// Transient overlays (search matches) write here; the next
    /// `update_syntax` discards them
    pub(crate) fn highlight_mut(&mut self) -> &mut [Highlight] {
        &mut self.hl
    }

    /// Whether a block comment is still open at the end of this row
    #[must_use]
    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Convert a character index into a render column
    #[must_use]
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &c| rx + advance(c, rx))
    }

    /// Convert a render column back into the character index covering it
    #[must_use]
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            cur_rx += advance(c, cur_rx);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    pub(crate) fn chars_mut(&mut self) -> &mut Vec<u8> {
        &mut self.chars
    }

    /// Re-derive `render` from `chars`
    pub(crate) fn update_render(&mut self) {
        self.render = render(&self.chars);
    }

    /// Recompute highlighting. Returns true when `open_comment` changed,
    /// meaning the next row has to be recomputed as well.
    pub(crate) fn update_syntax(
        &mut self,
        profile: Option<&SyntaxProfile>,
        inherited: bool,
    ) -> bool {
        let (hl, open) = highlight_row(profile, &self.render, inherited);
        self.hl = hl;
        let changed = self.open_comment != open;
        self.open_comment = open;
        changed
    }
}
