//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind a strict abstraction boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on normal exit and on error paths.
/// - Reads are bounded by a short timeout; writes are never reordered.
/// - Terminal code never depends on editor internals.
use crate::error::Result;
use crate::input::ByteSource;

pub mod ansi;
pub mod crossterm;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend: ByteSource {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> Result<()>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Write bytes to the terminal in one call
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Get terminal dimensions
    fn get_size(&mut self) -> Result<Size>;
}
