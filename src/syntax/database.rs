//! Built-in syntax profiles and filename matching

use super::SyntaxProfile;
use std::path::Path;

pub static HLDB: &[SyntaxProfile] = &[
    SyntaxProfile {
        file_type: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: &[
            "switch", "if", "while", "for", "break", "continue", "return", "else", "struct",
            "union", "typedef", "static", "enum", "class", "case", "int|", "long|", "double|",
            "float|", "char|", "unsigned|", "signed|", "void|",
        ],
        single_line_comment: Some("//"),
        multi_line_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    SyntaxProfile {
        file_type: "rust",
        file_match: &[".rs"],
        keywords: &[
            "fn", "let", "mut", "if", "else", "match", "for", "while", "loop", "return", "break",
            "continue", "struct", "enum", "impl", "trait", "pub", "use", "mod", "const", "static",
            "where", "as", "in", "ref", "move", "unsafe", "type", "i8|", "i16|", "i32|", "i64|",
            "u8|", "u16|", "u32|", "u64|", "usize|", "isize|", "f32|", "f64|", "bool|", "char|",
            "str|", "String|", "Self|", "Option|", "Result|", "Vec|",
        ],
        single_line_comment: Some("//"),
        multi_line_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    SyntaxProfile {
        file_type: "python",
        file_match: &[".py"],
        keywords: &[
            "def", "class", "if", "elif", "else", "for", "while", "return", "import", "from",
            "as", "with", "try", "except", "finally", "raise", "pass", "break", "continue",
            "lambda", "yield", "in", "is", "not", "and", "or", "global", "nonlocal", "True|",
            "False|", "None|", "self|", "int|", "str|", "float|", "list|", "dict|",
        ],
        single_line_comment: Some("#"),
        multi_line_comment: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Pick the profile for a filename.
///
/// Entries starting with `.` must equal the file's extension; any other
/// entry matches as a substring of the name.
#[must_use]
pub fn select_syntax(file_name: &str) -> Option<&'static SyntaxProfile> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"));

    HLDB.iter().find(|profile| {
        profile.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext.as_deref() == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    })
}
