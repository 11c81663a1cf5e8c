//! Core types for flashcard conversion.

use std::path::PathBuf;

/// Header row of every exported CSV document.
pub const CSV_HEADER: [&str; 2] = ["Front", "Back"];

/// A question/answer pair with both sides already rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardRecord {
    pub question: String,
    pub answer: String,
}

impl FlashcardRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Fields in CSV column order (Front, Back).
    pub fn as_row(&self) -> [&str; 2] {
        [&self.question, &self.answer]
    }
}

/// Ordered flashcards, in input order.
pub type FlashcardSet = Vec<FlashcardRecord>;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of records written (excluding the header).
    pub count: usize,
    /// Absolute path of the written CSV file.
    pub output_path: PathBuf,
}
