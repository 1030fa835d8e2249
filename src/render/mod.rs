//! Frame composition
//! Builds one escape-annotated output buffer per frame
//!
//! ## render/ Invariants
//!
//! - Rendering reads editor state and never mutates it.
//! - A frame is a single byte buffer handed to the terminal in one write.
//! - Color escapes are emitted only when the highlight class changes.
//! - The cursor is hidden while the frame is drawn and shown at the end.

use crate::constants::{ui, VERSION};
use crate::cursor::Cursor;
use crate::document::Document;
use crate::row::Row;
use crate::syntax::Highlight;
use crate::term::ansi;
use crate::viewport::Viewport;

/// Everything a frame is drawn from
pub struct FrameState<'a> {
    pub document: &'a Document,
    pub viewport: &'a Viewport,
    pub cursor: &'a Cursor,
    /// Message bar text, already filtered for expiry
    pub message: Option<&'a str>,
}

/// Compose a complete frame
#[must_use]
pub fn compose_frame(state: &FrameState<'_>) -> Vec<u8> {
    let viewport = state.viewport;
    let mut buf = Vec::with_capacity((viewport.visible_rows() + 2) * (viewport.visible_cols() + 8));

    buf.extend_from_slice(ansi::HIDE_CURSOR);
    buf.extend_from_slice(ansi::CURSOR_HOME);

    draw_rows(&mut buf, state.document, viewport);
    draw_status_bar(&mut buf, state.document, state.cursor, viewport.visible_cols());
    draw_message_bar(&mut buf, state.message, viewport.visible_cols());

    let screen_row = state.cursor.cy.saturating_sub(viewport.top_line());
    let screen_col = state.cursor.rx.saturating_sub(viewport.left_col());
    buf.extend_from_slice(ansi::format_cursor_position(screen_row, screen_col).as_bytes());
    buf.extend_from_slice(ansi::SHOW_CURSOR);
    buf
}

/// Text area: document rows, `~` filler, or the welcome banner
pub fn draw_rows(buf: &mut Vec<u8>, doc: &Document, viewport: &Viewport) {
    let rows = viewport.visible_rows();
    let cols = viewport.visible_cols();

    for y in 0..rows {
        match doc.row(y + viewport.top_line()) {
            Some(row) => draw_row(buf, row, viewport.left_col(), cols),
            None if doc.is_empty() && y == rows / 3 => draw_welcome(buf, cols),
            None => buf.push(ui::FILLER),
        }
        buf.extend_from_slice(ansi::CLEAR_TO_EOL);
        buf.extend_from_slice(b"\r\n");
    }
}

/// Visible slice of one row, colored by its highlight classes
pub fn draw_row(buf: &mut Vec<u8>, row: &Row, left_col: usize, width: usize) {
    let render = row.render();
    let hl = row.highlight();
    let start = left_col.min(render.len());
    let end = (start + width).min(render.len());

    let mut current_color: Option<u8> = None;
    for (&c, &class) in render[start..end].iter().zip(&hl[start..end]) {
        if c.is_ascii_control() {
            let sym = if c <= 26 { b'@' + c } else { b'?' };
            buf.extend_from_slice(ansi::REVERSE_VIDEO);
            buf.push(sym);
            buf.extend_from_slice(ansi::RESET_ATTRIBUTES);
            if let Some(color) = current_color {
                buf.extend_from_slice(ansi::format_foreground(color).as_bytes());
            }
        } else if class == Highlight::Normal {
            if current_color.take().is_some() {
                buf.extend_from_slice(ansi::DEFAULT_FOREGROUND);
            }
            buf.push(c);
        } else {
            let color = class.color();
            if current_color != Some(color) {
                current_color = Some(color);
                buf.extend_from_slice(ansi::format_foreground(color).as_bytes());
            }
            buf.push(c);
        }
    }
    buf.extend_from_slice(ansi::DEFAULT_FOREGROUND);
}

/// Centered banner shown in an empty document
pub fn draw_welcome(buf: &mut Vec<u8>, cols: usize) {
    let welcome = format!("Tilde editor -- version {VERSION}");
    let len = welcome.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        buf.push(ui::FILLER);
        padding -= 1;
    }
    buf.resize(buf.len() + padding, b' ');
    buf.extend_from_slice(&welcome.as_bytes()[..len]);
}

/// Reverse-video bar: file name, line count and dirty flag on the left;
/// file type and position on the right
pub fn draw_status_bar(buf: &mut Vec<u8>, doc: &Document, cursor: &Cursor, cols: usize) {
    buf.extend_from_slice(ansi::REVERSE_VIDEO);

    let name: String = doc
        .path()
        .map(|p| p.to_string_lossy().chars().take(ui::STATUS_NAME_WIDTH).collect())
        .unwrap_or_else(|| ui::NO_NAME.to_string());
    let modified = if doc.is_dirty() { "(modified)" } else { "" };
    let left = format!("{} - {} lines {}", name, doc.num_rows(), modified);
    let right = format!(
        "{} | {}/{}",
        doc.file_type().unwrap_or(ui::NO_FILETYPE),
        cursor.cy + 1,
        doc.num_rows()
    );

    let mut len = left.len().min(cols);
    buf.extend_from_slice(&left.as_bytes()[..len]);
    while len < cols {
        if cols - len == right.len() {
            buf.extend_from_slice(right.as_bytes());
            break;
        }
        buf.push(b' ');
        len += 1;
    }

    buf.extend_from_slice(ansi::RESET_ATTRIBUTES);
    buf.extend_from_slice(b"\r\n");
}

/// Timed message line
pub fn draw_message_bar(buf: &mut Vec<u8>, message: Option<&str>, cols: usize) {
    buf.extend_from_slice(ansi::CLEAR_TO_EOL);
    if let Some(msg) = message {
        let bytes = msg.as_bytes();
        buf.extend_from_slice(&bytes[..bytes.len().min(cols)]);
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
