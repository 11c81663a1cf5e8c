//! JSON reader for flashcard exports.
//!
//! # Format
//! ```json
//! [
//!   { "question": "What is Rust?", "answer": "A systems programming language." },
//!   { "question": "Name two Rust smart pointers", "answer": ["Box", "Rc"] }
//! ]
//! ```
//!
//! Missing keys and `null` become empty text, numbers and booleans are
//! written as their JSON text, and an array answer becomes one line per item.
//! Extra keys are ignored.

use crate::error::ParseError;
use crate::types::{FlashcardRecord, FlashcardSet};
use serde_json::{Map, Value};

pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse JSON content into flashcard records, preserving order.
pub fn parse(content: &str) -> ParseResult<FlashcardSet> {
    let value: Value = serde_json::from_str(content)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::NotAnArray {
                found: type_name(&other),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => parse_record(index, fields),
            other => Err(ParseError::RecordNotObject {
                index,
                found: type_name(other),
            }),
        })
        .collect()
}

fn parse_record(index: usize, fields: &Map<String, Value>) -> ParseResult<FlashcardRecord> {
    Ok(FlashcardRecord {
        question: field_text(index, fields, "question")?,
        answer: field_text(index, fields, "answer")?,
    })
}

fn field_text(index: usize, fields: &Map<String, Value>, field: &'static str) -> ParseResult<String> {
    let unsupported = |found| ParseError::UnsupportedValue { index, field, found };

    match fields.get(field) {
        None => Ok(String::new()),
        Some(Value::Array(items)) => {
            let lines = items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(|| unsupported(type_name(item))))
                .collect::<ParseResult<Vec<_>>>()?;
            Ok(lines.join("\n"))
        }
        Some(value) => scalar_text(value).ok_or_else(|| unsupported(type_name(value))),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
