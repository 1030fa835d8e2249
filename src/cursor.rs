//! Cursor position in character space plus its derived render column

use crate::document::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Character index within the row
    pub cx: usize,
    /// Row index; may equal the row count (the virtual line past the end)
    pub cy: usize,
    /// Render column of `cx`, refreshed before every frame
    pub rx: usize,
}

impl Cursor {
    /// Recompute `rx` from `cx` for the current row
    pub fn refresh_rx(&mut self, doc: &Document) {
        self.rx = doc.row(self.cy).map_or(0, |row| row.cx_to_rx(self.cx));
    }

    /// Length of the row under the cursor (0 past the end)
    #[must_use]
    pub fn row_len(&self, doc: &Document) -> usize {
        doc.row(self.cy).map_or(0, |row| row.len())
    }

    /// Keep `cx` within the current row
    pub fn clamp_to_row(&mut self, doc: &Document) {
        self.cx = self.cx.min(self.row_len(doc));
    }
}
