//! ANSI escape sequences for terminal control
//! Every frame is composed from these; the byte values are fixed

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CLEAR_TO_EOL: &[u8] = b"\x1b[K";
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[m";
pub const DEFAULT_FOREGROUND: &[u8] = b"\x1b[39m";

/// Move the cursor as far right and down as the terminal allows
pub const CURSOR_FAR_CORNER: &[u8] = b"\x1b[999C\x1b[999B";
/// Device status report: asks for `ESC [ rows ; cols R`
pub const QUERY_CURSOR_POSITION: &[u8] = b"\x1b[6n";

/// Format cursor position escape sequence (0-indexed input, 1-indexed output)
#[must_use]
pub fn format_cursor_position(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}

/// SGR foreground color
#[must_use]
pub fn format_foreground(color: u8) -> String {
    format!("\x1b[{color}m")
}

/// Parse a cursor position report (`ESC [ rows ; cols R`, trailing `R` optional)
#[must_use]
pub fn parse_cursor_report(buf: &[u8]) -> Option<(u16, u16)> {
    let body = buf.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R").unwrap_or(body);
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}
