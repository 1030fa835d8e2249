//! Editor settings
//! Runtime knobs with built-in defaults; there is no settings file

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Extra Ctrl-Q presses required to quit with unsaved changes
    pub quit_times: usize,
    /// How long a status message stays on the message bar
    pub message_timeout: Duration,
    /// Raw-mode read timeout; bounds escape-sequence lookahead
    pub read_timeout: Duration,
    /// Message shown at startup
    pub help_message: String,
}

impl EditorSettings {
    #[must_use]
    pub fn new() -> Self {
        EditorSettings {
            quit_times: 3,
            message_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_millis(100),
            help_message: "HELP: Ctrl-S = Save | Ctrl-Q = Quit | Ctrl-F = Find".to_string(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::new()
    }
}
