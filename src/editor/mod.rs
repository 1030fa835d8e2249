//! Editor core
//! Main editor logic that ties everything together
//!
//! ## editor/ Invariants
//!
//! - The editor is the only writer of document, cursor and viewport state.
//! - Every frame is composed from complete, up-to-date row state.
//! - Exactly one key is processed between two frames.
//! - Save failures become status messages; only terminal failures escape.

use crate::constants::ui;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::Result;
use crate::input::read_key;
use crate::key::Key;
use crate::prompt::{PromptEvent, PromptInput, PromptKind};
use crate::render::{self, FrameState};
use crate::search::SearchState;
use crate::settings::EditorSettings;
use crate::status::StatusMessage;
use crate::term::{ansi, TerminalBackend};
use crate::viewport::Viewport;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    status: StatusMessage,
    search: SearchState,
    settings: EditorSettings,
    /// Ctrl-Q presses still needed to discard unsaved changes
    quit_times: usize,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Create a new editor instance with an empty document
    pub fn new(terminal: T, settings: EditorSettings) -> Result<Self> {
        Self::with_file(terminal, settings, None)
    }

    /// Create a new editor instance with an optional file to load
    pub fn with_file(
        mut terminal: T,
        settings: EditorSettings,
        file_path: Option<PathBuf>,
    ) -> Result<Self> {
        // Load before touching the terminal so a failed open leaves it untouched
        let document = match &file_path {
            Some(path) => Document::open(path)?,
            None => Document::new(),
        };

        terminal.init()?;
        let size = terminal.get_size()?;
        let text_rows = (size.rows as usize).saturating_sub(ui::RESERVED_ROWS);
        let viewport = Viewport::new(text_rows, size.cols as usize);

        let mut status = StatusMessage::new(settings.message_timeout);
        status.set(settings.help_message.clone());

        info!(
            target: "editor",
            rows = size.rows,
            cols = size.cols,
            path = ?file_path,
            "editor started"
        );

        Ok(Editor {
            term: terminal,
            document,
            cursor: Cursor::default(),
            viewport,
            status,
            search: SearchState::new(),
            quit_times: settings.quit_times,
            settings,
            should_quit: false,
        })
    }

    /// Run the main editor loop until quit
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.refresh_screen()?;
            let key = read_key(&mut self.term)?;
            self.process_key(key)?;
        }
        info!(target: "editor", "quit");
        Ok(())
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current message bar text (regardless of expiry)
    #[must_use]
    pub fn status_message(&self) -> &str {
        self.status.text()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one decoded key
    pub fn process_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Ctrl(b'q') => {
                if self.document.is_dirty() && self.quit_times > 0 {
                    self.status.set(format!(
                        "WARNING: File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(());
                }
                let mut bytes = ansi::CLEAR_SCREEN.to_vec();
                bytes.extend_from_slice(ansi::CURSOR_HOME);
                self.term.write(&bytes)?;
                self.should_quit = true;
                return Ok(());
            }
            Key::Enter => self.insert_newline(),
            Key::Ctrl(b's') => self.save()?,
            Key::Ctrl(b'f') => self.find()?,
            Key::Home => self.cursor.cx = 0,
            Key::End => {
                if let Some(row) = self.document.row(self.cursor.cy) {
                    self.cursor.cx = row.len();
                }
            }
            Key::Backspace | Key::Ctrl(b'h') => self.delete_char(),
            Key::Delete => {
                self.move_cursor(Key::ArrowRight);
                self.delete_char();
            }
            Key::PageUp | Key::PageDown => self.page(key),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key)
            }
            Key::Ctrl(b'l') | Key::Escape => {}
            other => {
                if let Some(byte) = other.as_byte() {
                    self.insert_char(byte);
                }
            }
        }

        self.quit_times = self.settings.quit_times;
        Ok(())
    }

    /// Move the cursor one step, wrapping across row ends horizontally
    fn move_cursor(&mut self, key: Key) {
        let row_len = self.document.row(self.cursor.cy).map(|r| r.len());

        match key {
            Key::ArrowLeft => {
                if self.cursor.cx > 0 {
                    self.cursor.cx -= 1;
                } else if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                    self.cursor.cx = self.cursor.row_len(&self.document);
                }
            }
            Key::ArrowRight => match row_len {
                Some(len) if self.cursor.cx < len => self.cursor.cx += 1,
                Some(len) if self.cursor.cx == len => {
                    self.cursor.cy += 1;
                    self.cursor.cx = 0;
                }
                _ => {}
            },
            Key::ArrowUp => self.cursor.cy = self.cursor.cy.saturating_sub(1),
            Key::ArrowDown => {
                if self.cursor.cy < self.document.num_rows() {
                    self.cursor.cy += 1;
                }
            }
            _ => {}
        }

        self.cursor.clamp_to_row(&self.document);
    }

    /// Jump to the screen edge, then move a full screen
    fn page(&mut self, key: Key) {
        let rows = self.viewport.visible_rows();
        let step = if key == Key::PageUp {
            self.cursor.cy = self.viewport.top_line();
            Key::ArrowUp
        } else {
            let bottom = (self.viewport.top_line() + rows).saturating_sub(1);
            self.cursor.cy = bottom.min(self.document.num_rows());
            Key::ArrowDown
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
    }

    fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.document.num_rows() {
            self.document.insert_row(self.document.num_rows(), b"");
        }
        self.document.insert_char(self.cursor.cy, self.cursor.cx, byte);
        self.cursor.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.document.insert_row(self.cursor.cy, b"");
        } else {
            self.document.split_row(self.cursor.cy, self.cursor.cx);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Delete the character before the cursor, joining rows at column 0
    fn delete_char(&mut self) {
        if self.cursor.cy >= self.document.num_rows() {
            return;
        }
        if self.cursor.cx == 0 && self.cursor.cy == 0 {
            return;
        }

        if self.cursor.cx > 0 {
            self.document.delete_char(self.cursor.cy, self.cursor.cx - 1);
            self.cursor.cx -= 1;
        } else if let Some(join_col) = self.document.join_with_previous(self.cursor.cy) {
            self.cursor.cy -= 1;
            self.cursor.cx = join_col;
        }
    }

    /// Save the document, asking for a name first if it has none
    fn save(&mut self) -> Result<()> {
        if self.document.path().is_none() {
            match self.prompt(PromptKind::SaveAs)? {
                Some(name) => self.document.set_path(name),
                None => {
                    self.status.set("Save Aborted");
                    return Ok(());
                }
            }
        }

        match self.document.save() {
            Ok(written) => self.status.set(format!("{written} bytes written to disk")),
            Err(e) => {
                warn!(target: "io", error = %e, "save failed");
                self.status.set(format!("Save Failed! I/O Error: {}", e.message));
            }
        }
        Ok(())
    }

    /// Incremental search; cancelling restores the cursor and scroll position
    fn find(&mut self) -> Result<()> {
        let saved_cursor = self.cursor;
        let saved_scroll = (self.viewport.top_line(), self.viewport.left_col());

        let query = self.prompt(PromptKind::Search)?;
        if query.is_none() {
            self.cursor = saved_cursor;
            self.viewport.set_scroll(saved_scroll.0, saved_scroll.1);
        }
        self.search.reset(&mut self.document);
        Ok(())
    }

    /// Read a line of input on the message bar.
    ///
    /// Returns `None` when the user cancels with Escape.
    fn prompt(&mut self, kind: PromptKind) -> Result<Option<String>> {
        let mut input = PromptInput::new();

        loop {
            self.status.set(kind.message(&input.text()));
            self.refresh_screen()?;

            let key = read_key(&mut self.term)?;
            let event = input.handle_key(key);
            self.observe_prompt_key(kind, input.as_bytes(), key);

            match event {
                PromptEvent::Continue => {}
                PromptEvent::Cancel => {
                    self.status.clear();
                    return Ok(None);
                }
                PromptEvent::Accept => {
                    self.status.clear();
                    return Ok(Some(input.text()));
                }
            }
        }
    }

    /// Per-keystroke hook of the active prompt
    fn observe_prompt_key(&mut self, kind: PromptKind, buffer: &[u8], key: Key) {
        match kind {
            PromptKind::SaveAs => {}
            PromptKind::Search => {
                if let Some(found) = self.search.on_key(&mut self.document, buffer, key) {
                    debug!(target: "editor", row = found.row, cx = found.cx, "search match");
                    self.cursor.cy = found.row;
                    self.cursor.cx = found.cx;
                    // Past the end, so the next scroll puts the match row on top
                    let left = self.viewport.left_col();
                    self.viewport.set_scroll(self.document.num_rows(), left);
                }
            }
        }
    }

    /// Bring the viewport to the cursor and draw one frame
    pub fn refresh_screen(&mut self) -> Result<()> {
        self.cursor.refresh_rx(&self.document);
        self.viewport.update(self.cursor.cy, self.cursor.rx);

        let frame = render::compose_frame(&FrameState {
            document: &self.document,
            viewport: &self.viewport,
            cursor: &self.cursor,
            message: self.status.visible_at(Instant::now()),
        });
        self.term.write(&frame)
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
