//! Prompt line
//! Single-line input shown in the message bar, shared by Save-As and Search

use crate::constants::prompts;
use crate::key::Key;

/// What the prompt is collecting; each kind has its own per-key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

impl PromptKind {
    /// Message bar text for the current input
    #[must_use]
    pub fn message(&self, input: &str) -> String {
        let template = match self {
            PromptKind::SaveAs => prompts::SAVE_AS,
            PromptKind::Search => prompts::SEARCH,
        };
        template.replace("{}", input)
    }
}

/// Result of feeding one key to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// Keep reading keys
    Continue,
    /// Enter with a non-empty buffer
    Accept,
    /// Escape
    Cancel,
}

/// Text typed into the prompt so far
#[derive(Debug, Default, Clone)]
pub struct PromptInput {
    buf: Vec<u8>,
}

impl PromptInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Input as text (only printable ASCII is ever accepted)
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    pub fn handle_key(&mut self, key: Key) -> PromptEvent {
        match key {
            Key::Backspace | Key::Delete | Key::Ctrl(b'h') => {
                self.buf.pop();
                PromptEvent::Continue
            }
            Key::Escape => PromptEvent::Cancel,
            Key::Enter if !self.buf.is_empty() => PromptEvent::Accept,
            _ => {
                if let Some(b) = key.printable() {
                    self.buf.push(b);
                }
                PromptEvent::Continue
            }
        }
    }
}
