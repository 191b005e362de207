//! Request body decoding.

use serde_json::{Map, Value};
use thiserror::Error;

/// Body that is not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input JSON error: {message} at offset {offset}")]
pub struct DecodeError {
    pub message: String,
    /// Byte offset of the error in the body.
    pub offset: usize,
}

/// Parses `body` as a JSON object.
pub fn decode_object(body: &[u8]) -> Result<Map<String, Value>, DecodeError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(DecodeError {
            message: "document is not an object".to_string(),
            offset: 0,
        }),
        Err(err) => Err(DecodeError {
            message: parser_message(&err),
            offset: byte_offset(body, err.line(), err.column()),
        }),
    }
}

/// serde_json's message without its trailing " at line L column C".
fn parser_message(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(position) => text[..position].to_string(),
        None => text,
    }
}

/// Converts a 1-based line and column into a byte offset.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(body.len())
}
