//! Viewport management
//! Handles the visible portion of the document

//! ## viewport/ Invariants
//!
//! - The viewport represents a window into document content.
//! - The viewport never mutates document contents.
//! - After `update`, the cursor is always inside the window.
//! - Columns are render columns (tabs expanded).

/// Viewport manages which portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Top row of the visible area (0-indexed)
    top_line: usize,
    /// Leftmost visible render column (0-indexed)
    left_col: usize,
    /// Number of text rows (status and message bars excluded)
    visible_rows: usize,
    /// Number of visible columns
    visible_cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            top_line: 0,
            left_col: 0,
            visible_rows: rows,
            visible_cols: cols,
        }
    }

    /// Scroll so that `(cursor_row, cursor_rx)` is visible
    pub fn update(&mut self, cursor_row: usize, cursor_rx: usize) {
        // --- Vertical Scrolling ---
        if cursor_row < self.top_line {
            self.top_line = cursor_row;
        }
        if cursor_row >= self.top_line + self.visible_rows {
            self.top_line = (cursor_row + 1).saturating_sub(self.visible_rows);
        }

        // --- Horizontal Scrolling ---
        if cursor_rx < self.left_col {
            self.left_col = cursor_rx;
        }
        if cursor_rx >= self.left_col + self.visible_cols {
            self.left_col = (cursor_rx + 1).saturating_sub(self.visible_cols);
        }
    }

    #[must_use]
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Get the leftmost visible column
    #[must_use]
    pub fn left_col(&self) -> usize {
        self.left_col
    }

    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    #[must_use]
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    /// Set the scroll position (used when restoring view state)
    pub fn set_scroll(&mut self, top_line: usize, left_col: usize) {
        self.top_line = top_line;
        self.left_col = left_col;
    }
}
