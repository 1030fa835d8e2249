//! Input decoding
//! Turns the raw terminal byte stream into logical keys
//!
//! ## input/ Invariants
//!
//! - One call consumes exactly one logical key.
//! - An escape sequence never consumes more than three bytes after `ESC`.
//! - A read timeout inside a sequence yields `Key::Escape`, never a hang.
//! - Unrecognized sequences degrade to `Key::Escape` and are never fatal.

use crate::error::Result;
use crate::key::{Key, ESC};
use std::collections::VecDeque;

/// A source of raw input bytes with a bounded read timeout
pub trait ByteSource {
    /// Read one byte, returning `Ok(None)` when the read timeout elapses
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// Prerecorded input; an empty queue behaves like a timed-out read
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// Read and decode a single keypress
/// Blocks (retrying timed-out reads) until the first byte arrives
pub fn read_key<S: ByteSource + ?Sized>(src: &mut S) -> Result<Key> {
    let first = loop {
        if let Some(byte) = src.read_byte()? {
            break byte;
        }
    };

    if first == ESC {
        decode_escape(src)
    } else {
        Ok(Key::from_byte(first))
    }
}

/// Decode the remainder of a sequence whose `ESC` was already consumed
pub fn decode_escape<S: ByteSource + ?Sized>(src: &mut S) -> Result<Key> {
    let Some(intro) = src.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(second) = src.read_byte()? else {
        return Ok(Key::Escape);
    };

    let key = match intro {
        b'[' if second.is_ascii_digit() => {
            let Some(terminator) = src.read_byte()? else {
                return Ok(Key::Escape);
            };
            if terminator == b'~' {
                csi_tilde(second)
            } else {
                None
            }
        }
        b'[' => csi_final(second),
        b'O' => ss3_final(second),
        _ => None,
    };

    Ok(key.unwrap_or(Key::Escape))
}

/// `ESC [ <digit> ~`
fn csi_tilde(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC [ <letter>`
fn csi_final(byte: u8) -> Option<Key> {
    match byte {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `ESC O <letter>` (application cursor mode)
fn ss3_final(byte: u8) -> Option<Key> {
    match byte {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}
