//! Test utilities
//! Shared testing helpers and mocks

use crate::constants::errors;
use crate::error::{ErrorType, Result, TildeError};
use crate::input::ByteSource;
use crate::term::{Size, TerminalBackend};
use std::collections::VecDeque;

/// Consecutive empty reads after which the mock reports exhausted input
const MAX_IDLE_READS: usize = 64;

/// Mock terminal backend for testing
/// Replays scripted input bytes and records every write
pub struct MockTerminal {
    pub input: VecDeque<u8>,
    pub writes: Vec<Vec<u8>>,
    pub size: (u16, u16),
    pub init_calls: usize,
    idle_reads: usize,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            input: VecDeque::new(),
            writes: Vec::new(),
            size: (rows, cols),
            init_calls: 0,
            idle_reads: 0,
        }
    }

    /// Queue raw bytes to be read as keyboard input
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Get all written bytes as a single vector
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// The most recent write as a string (lossy UTF-8 conversion)
    pub fn last_write_string(&self) -> String {
        self.writes
            .last()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .unwrap_or_default()
    }

    /// Clear all recorded writes (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl ByteSource for MockTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        match self.input.pop_front() {
            Some(byte) => {
                self.idle_reads = 0;
                Ok(Some(byte))
            }
            None if self.idle_reads >= MAX_IDLE_READS => Err(TildeError::critical(
                ErrorType::Input,
                errors::INPUT_EXHAUSTED,
                "Scripted input exhausted",
            )),
            None => {
                self.idle_reads += 1;
                Ok(None)
            }
        }
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.init_calls += 1;
        Ok(())
    }

    fn deinit(&mut self) {}

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&mut self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }
}
