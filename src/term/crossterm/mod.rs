//! Crossterm-based terminal backend
//! Raw mode and screen management through crossterm, timed byte reads from the tty

use crossterm::{execute, terminal};
use std::io::{stdout, Read, Write};
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::errors;
use crate::error::{ErrorType, Result, TildeError};
use crate::input::ByteSource;
use crate::term::ansi;
use crate::term::{Size, TerminalBackend};

/// Longest cursor position report accepted during the size fallback
const MAX_REPORT_LEN: usize = 31;

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    /// Unbuffered handle used for input so `poll` sees every pending byte
    tty: Option<std::fs::File>,
    read_timeout: Duration,
}

impl CrosstermBackend {
    pub fn new(read_timeout: Duration) -> Result<Self> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
            tty: None,
            read_timeout,
        })
    }

    /// Ask the terminal where the cursor ends up after moving to the far corner
    fn size_from_cursor_report(&mut self) -> Result<Size> {
        self.write(ansi::CURSOR_FAR_CORNER)?;
        self.write(ansi::QUERY_CURSOR_POSITION)?;

        let mut report = Vec::with_capacity(MAX_REPORT_LEN);
        while report.len() < MAX_REPORT_LEN {
            match self.read_byte()? {
                Some(b'R') | None => break,
                Some(byte) => report.push(byte),
            }
        }

        ansi::parse_cursor_report(&report)
            .map(|(rows, cols)| Size { rows, cols })
            .ok_or_else(|| {
                TildeError::critical(
                    ErrorType::Terminal,
                    errors::WINDOW_SIZE,
                    "Failed to determine terminal size",
                )
            })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        // Enable alternate screen buffer (prevents scrolling in main buffer)
        execute!(stdout(), terminal::EnterAlternateScreen).map_err(|e| {
            terminal_error(
                errors::RAW_MODE,
                format!("Failed to enter alternate screen: {e}"),
            )
        })?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| {
            terminal_error(errors::RAW_MODE, format!("Failed to enable raw mode: {e}"))
        })?;
        self.raw_mode_enabled = true;

        #[cfg(unix)]
        {
            let tty = std::fs::File::open("/dev/tty").map_err(|e| {
                terminal_error(errors::RAW_MODE, format!("Failed to open /dev/tty: {e}"))
            })?;
            self.tty = Some(tty);
        }

        debug!(target: "term", "raw mode enabled");
        Ok(())
    }

    fn deinit(&mut self) {
        self.tty = None;

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        // Exit alternate screen buffer
        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        debug!(target: "term", "terminal restored");
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|e| terminal_error(errors::WRITE_FAILED, format!("Write failed: {e}")))
    }

    fn get_size(&mut self) -> Result<Size> {
        match terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Ok(Size { rows, cols }),
            other => {
                warn!(target: "term", ?other, "size query failed, asking the terminal");
                self.size_from_cursor_report()
            }
        }
    }
}

impl ByteSource for CrosstermBackend {
    #[cfg(unix)]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        use nix::errno::Errno;
        use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
        use std::os::fd::AsFd;

        let Some(tty) = self.tty.as_mut() else {
            return Err(TildeError::critical(
                ErrorType::Input,
                errors::READ_FAILED,
                "Terminal is not initialized",
            ));
        };

        let timeout_ms: u16 = self.read_timeout.as_millis().try_into().unwrap_or(u16::MAX);
        let ready = {
            let mut poll_fds = [PollFd::new(tty.as_fd(), PollFlags::POLLIN)];
            match poll(&mut poll_fds, PollTimeout::from(timeout_ms)) {
                Ok(n) => n,
                Err(Errno::EINTR) => return Ok(None),
                Err(e) => return Err(read_error(e)),
            }
        };
        if ready == 0 {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match tty.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(read_error(e)),
        }
    }

    /// Without `poll(2)` reads block; escape sequences still arrive as one burst
    #[cfg(not(unix))]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match std::io::stdin().read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(read_error(e)),
        }
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.deinit();
    }
}

fn terminal_error(code: &str, message: String) -> TildeError {
    TildeError::critical(ErrorType::Terminal, code, message)
}

fn read_error(e: impl std::fmt::Display) -> TildeError {
    TildeError::critical(
        ErrorType::Input,
        errors::READ_FAILED,
        format!("Failed to read input: {e}"),
    )
}
