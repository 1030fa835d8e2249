//! Tilde - A small full-screen terminal text editor

pub mod constants;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod key;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod row;
pub mod search;
pub mod settings;
pub mod status;
pub mod syntax;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
