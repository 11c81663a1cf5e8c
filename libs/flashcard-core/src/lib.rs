//! Core flashcard library for the `flashcard-csv` converter.
//!
//! Provides:
//! - JSON reader for question/answer flashcard exports
//! - CSV writer producing `Front,Back` documents for flashcard apps
//! - The file-to-file conversion with atomic output
//! - Shared types and the error taxonomy

pub mod convert;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

pub use convert::{convert, default_output_path};
pub use error::{ConvertError, ErrorKind, ParseError, Result};
pub use export::{to_csv_bytes, write_csv};
pub use parser::parse;
pub use types::{ConversionReport, FlashcardRecord, FlashcardSet, CSV_HEADER};
