//! Global constants for the Tilde editor

/// Version string shown in the welcome banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tabs expand to the next multiple of this many columns
pub const TAB_STOP: usize = 8;

pub mod ui {
    /// Display text for documents with no file path
    pub const NO_NAME: &str = "[No Name]";

    /// Display text when no syntax profile matched
    pub const NO_FILETYPE: &str = "No Filetype";

    /// Filler glyph for screen rows past the end of the document
    pub const FILLER: u8 = b'~';

    /// Maximum number of filename characters shown in the status bar
    pub const STATUS_NAME_WIDTH: usize = 20;

    /// Rows reserved below the text area (status bar + message bar)
    pub const RESERVED_ROWS: usize = 2;
}

pub mod prompts {
    pub const SAVE_AS: &str = "Save As: {} (ESC to cancel)";
    pub const SEARCH: &str = "Search: {} (Use ESC/Arrows/Enter)";
}

pub mod errors {
    // Error Codes
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const OPEN_FAILED: &str = "OPEN_FAILED";
    pub const RAW_MODE: &str = "RAW_MODE";
    pub const WINDOW_SIZE: &str = "WINDOW_SIZE";
    pub const READ_FAILED: &str = "READ_FAILED";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const INPUT_EXHAUSTED: &str = "INPUT_EXHAUSTED";
}
