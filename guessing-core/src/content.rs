//! Loading the code and phrase files the games are built from.

use crate::mastermind::{parse_colors, Code};
use crate::ContentError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read the Mastermind code from the first line of `path`.
///
/// The line holds whitespace-separated color tokens and must contain exactly
/// `length` of them.
pub fn load_code(path: &Path, length: usize) -> Result<Code, ContentError> {
    let text = fs::read_to_string(path).map_err(|err| ContentError::new(path, err.to_string()))?;
    let line = text
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ContentError::new(path, "the file is empty"))?;

    let colors = parse_colors(line).map_err(|err| ContentError::new(path, err.to_string()))?;
    if colors.len() != length {
        return Err(ContentError::new(
            path,
            format!("expected {length} colors, found {}", colors.len()),
        ));
    }
    Ok(Code::new(colors))
}

/// Like [`load_code`], but any failure is logged and replaced by
/// [`Code::fallback`].
pub fn load_code_or_fallback(path: &Path, length: usize) -> Code {
    match load_code(path, length) {
        Ok(code) => {
            info!(path = %path.display(), "code loaded");
            code
        }
        Err(err) => {
            warn!(error = %err, "could not load code, using fallback");
            Code::fallback(length)
        }
    }
}

/// Read one phrase per line from `path`, trimmed, skipping blank lines.
pub fn load_phrases(path: &Path) -> Result<Vec<String>, ContentError> {
    let text = fs::read_to_string(path).map_err(|err| ContentError::new(path, err.to_string()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Like [`load_phrases`], but an unreadable file is logged and yields an
/// empty pool.
pub fn load_phrases_or_empty(path: &Path) -> Vec<String> {
    match load_phrases(path) {
        Ok(phrases) => {
            if phrases.is_empty() {
                warn!(path = %path.display(), "phrase file has no phrases");
            } else {
                info!(path = %path.display(), count = phrases.len(), "phrases loaded");
            }
            phrases
        }
        Err(err) => {
            warn!(error = %err, "could not load phrases");
            Vec::new()
        }
    }
}
