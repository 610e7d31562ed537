//! Program-image loader.
//!
//! A program image is plain text: one 32-bit machine word per line, written
//! in hexadecimal (an optional `0x` prefix is accepted), optionally followed
//! by a human-readable mnemonic which the engine ignores. Blank lines are
//! skipped. Each logical line maps to one instruction-memory word, in order.
//!
//! Loading is the only fatal boundary of the simulator: an unreadable file
//! or a malformed word is reported as a [`LoadError`] and no cycle executes.

use std::fs;
use std::path::Path;

use crate::common::LoadError;

/// Loads a program image from a file.
///
/// # Arguments
///
/// * `path` - Path to the program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::BadWord`] when a line does not start with a 32-bit hex word.
pub fn load_program(path: &Path) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_program(&text)
}

/// Parses a program image from text.
///
/// # Errors
///
/// Returns [`LoadError::BadWord`] when a non-blank line does not start with
/// a 32-bit hex word.
pub fn parse_program(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        let digits = token.strip_prefix("0x").unwrap_or(token);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::BadWord {
            line: idx + 1,
            token: token.to_string(),
        })?;
        words.push(word);
    }

    Ok(words)
}
