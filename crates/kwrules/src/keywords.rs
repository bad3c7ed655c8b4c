//! Reading and ordering of keyword lists.
//!
//! A keyword list is plain text with one keyword per line. Lines are trimmed
//! but never filtered, so a blank line becomes an empty keyword.

use std::{fs, path::Path};

use crate::GenError;

/// Splits `text` into trimmed keywords sorted by code point.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A trailing line break does
/// not produce an extra keyword. Duplicates are kept.
pub fn parse_keywords(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let mut keywords: Vec<String> = text
        .split_terminator(['\r', '\n'])
        .map(|x| x.trim().to_string())
        .collect();
    // byte order on UTF-8 is code point order
    keywords.sort();
    keywords
}

pub fn read_keywords(path: &Path) -> Result<Vec<String>, GenError> {
    let text = fs::read_to_string(path).map_err(|source| GenError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_keywords(&text))
}
