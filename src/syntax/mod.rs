//! Syntax highlighting
//! Per-row classification driven by static language profiles
//!
//! ## syntax/ Invariants
//!
//! - A row's highlight vector has exactly one entry per rendered byte.
//! - Highlighting a row depends only on its rendered bytes, the active
//!   profile, and whether a block comment is open at the end of the previous row.
//! - Profiles are immutable static data.

pub mod database;

pub use database::{select_syntax, HLDB};

/// Classification of a single rendered byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    Match,
}

impl Highlight {
    /// SGR foreground color code for this class
    #[must_use]
    pub fn color(self) -> u8 {
        match self {
            Highlight::Comment | Highlight::BlockComment => 36,
            Highlight::Keyword1 => 33,
            Highlight::Keyword2 => 32,
            Highlight::String => 35,
            Highlight::Number => 31,
            Highlight::Match => 34,
            Highlight::Normal => 37,
        }
    }
}

/// Static description of how to highlight one language
#[derive(Debug, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Language tag shown in the status bar
    pub file_type: &'static str,
    /// Extensions (leading `.`) or filename fragments selecting this profile
    pub file_match: &'static [&'static str],
    /// Keywords; a trailing `|` marks the second class (type names)
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    /// Block comment start and end markers
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

/// Punctuation that ends a token, besides whitespace and NUL
const SEPARATORS: &[u8] = b",.()+-/*=%<>[];";

/// Token boundary test used for keywords and numbers
#[must_use]
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0) || SEPARATORS.contains(&c)
}

/// Classify every byte of `rendered`.
///
/// `open_comment` is the block-comment state inherited from the previous
/// row. Returns the highlight vector and whether a block comment is still
/// open at the end of this row.
#[must_use]
pub fn highlight_row(
    profile: Option<&SyntaxProfile>,
    rendered: &[u8],
    open_comment: bool,
) -> (Vec<Highlight>, bool) {
    let mut hl = vec![Highlight::Normal; rendered.len()];
    let Some(profile) = profile else {
        return (hl, false);
    };

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = open_comment;

    let mut i = 0;
    while i < rendered.len() {
        let c = rendered[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };
        let rest = &rendered[i..];

        if let Some(marker) = profile.single_line_comment {
            if in_string.is_none() && !in_comment && rest.starts_with(marker.as_bytes()) {
                hl[i..].fill(Highlight::Comment);
                break;
            }
        }

        if let Some((start, end)) = profile.multi_line_comment {
            if in_string.is_none() {
                if in_comment {
                    if rest.starts_with(end.as_bytes()) {
                        hl[i..i + end.len()].fill(Highlight::BlockComment);
                        i += end.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        hl[i] = Highlight::BlockComment;
                        i += 1;
                    }
                    continue;
                } else if rest.starts_with(start.as_bytes()) {
                    hl[i..i + start.len()].fill(Highlight::BlockComment);
                    i += start.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if profile.highlight_strings {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < rendered.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if profile.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = match_keyword(profile.keywords, rest) {
                hl[i..i + len].fill(class);
                i += len;
                // The byte after a keyword is a separator and resets this on the next step
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    (hl, in_comment)
}

/// Match a keyword at the start of `rest`, requiring a separator (or the end
/// of the row) right after it
fn match_keyword(keywords: &[&str], rest: &[u8]) -> Option<(usize, Highlight)> {
    keywords.iter().find_map(|keyword| {
        let (word, class) = match keyword.strip_suffix('|') {
            Some(word) => (word, Highlight::Keyword2),
            None => (*keyword, Highlight::Keyword1),
        };
        let word = word.as_bytes();
        let next = rest.get(word.len()).copied().unwrap_or(0);
        (rest.starts_with(word) && is_separator(next)).then_some((word.len(), class))
    })
}
