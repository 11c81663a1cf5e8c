//! CSV writer for flashcard applications.
//!
//! Output is a two-column `Front,Back` document. Fields are quoted only
//! when they contain a comma, a quote, or a line break, and embedded
//! quotes are doubled. Records end in `\r\n`.

use crate::types::{FlashcardRecord, CSV_HEADER};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Write the header and one row per record to `writer`.
pub fn write_csv<W: Write>(records: &[FlashcardRecord], writer: W) -> csv::Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(record.as_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render records to an in-memory CSV document.
pub fn to_csv_bytes(records: &[FlashcardRecord]) -> csv::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}
