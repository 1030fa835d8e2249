//! Document management
//! Owns the ordered rows, the file association, and the dirty counter
//!
//! ## document/ Invariants
//!
//! - `rows[i].index() == i` after every mutation.
//! - Every content change re-derives the touched row's render and highlight
//!   forms before returning, including block-comment propagation to later rows.
//! - Out-of-range positions clamp (inserts) or do nothing (deletes); they are
//!   never errors.
//! - The dirty counter only grows while editing and resets on a successful save.

use crate::constants::errors;
use crate::error::{ErrorType, Result, TildeError};
use crate::row::Row;
use crate::syntax::{select_syntax, Highlight, SyntaxProfile};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The in-memory text being edited
#[derive(Debug, Default)]
pub struct Document {
    rows: Vec<Row>,
    /// File path (None if new/unsaved)
    file_path: Option<PathBuf>,
    syntax: Option<&'static SyntaxProfile>,
    /// Content mutations since the last save
    dirty: u64,
}

impl Document {
    /// Create a new empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from in-memory lines (no file association)
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut doc = Self::new();
        for line in lines {
            doc.insert_row(doc.num_rows(), line);
        }
        doc.dirty = 0;
        doc
    }

    /// Load a document from disk, stripping trailing CR/LF from every line.
    ///
    /// A missing file yields an empty document bound to `path`, so the first
    /// save creates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut doc = Self::new();
        doc.file_path = Some(path.to_path_buf());
        doc.syntax = select_syntax(&path.to_string_lossy());

        match fs::File::open(path) {
            Ok(file) => {
                for line in BufReader::new(file).split(b'\n') {
                    let mut line = line.map_err(|e| open_error(path, e))?;
                    while matches!(line.last(), Some(b'\n' | b'\r')) {
                        line.pop();
                    }
                    doc.insert_row(doc.num_rows(), &line);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(target: "io", path = %path.display(), "new file");
            }
            Err(e) => return Err(open_error(path, e)),
        }

        doc.dirty = 0;
        info!(
            target: "io",
            path = %path.display(),
            rows = doc.num_rows(),
            file_type = doc.file_type().unwrap_or("none"),
            "opened"
        );
        Ok(doc)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of content mutations since the last save
    #[must_use]
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Bind the document to a new path and re-select its syntax profile
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.file_path = Some(path.to_path_buf());
        self.syntax = select_syntax(&path.to_string_lossy());
        self.rehighlight_all();
    }

    #[must_use]
    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    /// Language tag of the active profile
    #[must_use]
    pub fn file_type(&self) -> Option<&'static str> {
        self.syntax.map(|s| s.file_type)
    }

    /// Insert a new row before `at` (clamped to the row count)
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, text));
        self.reindex_from(at + 1);
        self.update_syntax_from(at);
        // The following row now inherits from the new one
        self.update_syntax_from(at + 1);
        self.dirty += 1;
        debug!(target: "document", at, len = text.len(), "insert_row");
    }

    /// Remove row `at`; out-of-range is a no-op
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.reindex_from(at);
        self.update_syntax_from(at);
        self.dirty += 1;
        debug!(target: "document", at, "delete_row");
    }

    /// Insert `ch` into row `at` before column `col` (clamped to the row length)
    pub fn insert_char(&mut self, at: usize, col: usize, ch: u8) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let col = col.min(row.len());
        row.chars_mut().insert(col, ch);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Delete the character at `col` in row `at`; out-of-range is a no-op
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col >= row.len() {
            return;
        }
        row.chars_mut().remove(col);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `at`
    pub fn append_text(&mut self, at: usize, text: &[u8]) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.chars_mut().extend_from_slice(text);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Split row `at` at `col`: the tail moves to a new row below
    pub fn split_row(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get(at) else {
            return;
        };
        let col = col.min(row.len());
        let tail = row.chars()[col..].to_vec();
        self.insert_row(at + 1, &tail);
        self.rows[at].chars_mut().truncate(col);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Join row `at` onto the end of the previous row and remove it.
    ///
    /// Returns the column of the join point in the previous row, or `None`
    /// when there is no previous row.
    pub fn join_with_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.rows.len() {
            return None;
        }
        let join_col = self.rows[at - 1].len();
        let moved = self.rows[at].chars().to_vec();
        self.append_text(at - 1, &moved);
        self.delete_row(at);
        Some(join_col)
    }

    /// Serialize the rows, each followed by `\n`
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(row.chars());
            buf.push(b'\n');
        }
        buf
    }

    /// Save to the bound path, returning the number of bytes written
    pub fn save(&mut self) -> Result<usize> {
        let path = self.file_path.clone().ok_or_else(|| {
            TildeError::new(ErrorType::Io, errors::SAVE_FAILED, "No file name")
        })?;
        let bytes = self.to_bytes();
        write_atomically(&path, &bytes).map_err(|e| {
            TildeError::new(ErrorType::Io, errors::SAVE_FAILED, e.to_string())
        })?;
        self.dirty = 0;
        info!(target: "io", path = %path.display(), bytes = bytes.len(), "saved");
        Ok(bytes.len())
    }

    /// Mutable highlight access for transient overlays
    pub(crate) fn highlight_mut(&mut self, at: usize) -> Option<&mut [Highlight]> {
        self.rows.get_mut(at).map(Row::highlight_mut)
    }

    /// Recompute every row's highlighting (after a profile change)
    fn rehighlight_all(&mut self) {
        let mut open = false;
        for row in &mut self.rows {
            row.update_syntax(self.syntax, open);
            open = row.open_comment();
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.set_index(i);
        }
    }

    /// Re-derive render and highlight after `chars` of row `at` changed
    fn update_row(&mut self, at: usize) {
        self.rows[at].update_render();
        self.update_syntax_from(at);
    }

    /// Highlight row `start`, then keep going down while the block-comment
    /// state handed to the next row keeps changing
    fn update_syntax_from(&mut self, start: usize) {
        let mut at = start;
        while at < self.rows.len() {
            let inherited = at > 0 && self.rows[at - 1].open_comment();
            if !self.rows[at].update_syntax(self.syntax, inherited) {
                break;
            }
            at += 1;
        }
    }
}

fn open_error(path: &Path, e: io::Error) -> TildeError {
    TildeError::critical(
        ErrorType::Io,
        errors::OPEN_FAILED,
        format!("{}: {}", path.display(), e),
    )
}

/// Write through a temporary sibling file and rename it over `path`.
///
/// Symlinks are resolved first so the link survives and its target gets the
/// new content; the target's permissions are carried over to the new file.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp_path = parent.join(format!(
        ".{}.tmp",
        target.file_name().and_then(|n| n.to_str()).unwrap_or("file")
    ));
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let result = write_temp(&temp_path, bytes, permissions)
        .and_then(|()| fs::rename(&temp_path, &target));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(
    temp_path: &Path,
    bytes: &[u8],
    permissions: Option<fs::Permissions>,
) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(bytes)?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }
    file.sync_all()
}
