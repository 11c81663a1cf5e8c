//! JSON to CSV conversion of flashcard files.

use crate::error::{ConvertError, ParseError, Result};
use crate::export::write_csv;
use crate::parser::parse;
use crate::types::{ConversionReport, FlashcardSet};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Convert the flashcard JSON at `input` into a CSV file at `output`.
///
/// The input is read and parsed in full before `output` is touched, so a
/// missing or malformed input never creates or truncates the output file.
/// The CSV is written to a uniquely named temp file in the output's
/// directory and persisted over `output` only once fully written.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionReport> {
    let cards = read_flashcards(input)?;
    tracing::debug!(path = %input.display(), records = cards.len(), "parsed flashcards");

    let output_path = std::path::absolute(output)?;
    write_atomic(&cards, &output_path)?;

    tracing::info!(path = %output_path.display(), records = cards.len(), "wrote csv");

    Ok(ConversionReport {
        count: cards.len(),
        output_path,
    })
}

/// Default output location: `input` with its extension replaced by `.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

fn read_flashcards(input: &Path) -> Result<FlashcardSet> {
    let bytes = fs::read(input).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::FileNotFound {
            path: input.to_path_buf(),
        },
        _ => ConvertError::Io(e),
    })?;

    let content = std::str::from_utf8(&bytes).map_err(|_| ParseError::NotUtf8)?;
    Ok(parse(content)?)
}

fn write_atomic(cards: &FlashcardSet, output: &Path) -> Result<()> {
    let dir = output.parent().unwrap_or_else(|| Path::new("."));
    let tmp = temp_file_in(dir)?;
    tracing::debug!(path = %tmp.path().display(), "writing temp file");

    let mut writer = BufWriter::new(tmp);
    write_csv(cards, &mut writer)?;
    writer.flush()?;
    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;

    // Dropping the temp file on any earlier return removes it.
    tmp.persist(output).map_err(|e| e.error)?;
    Ok(())
}

fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".flashcard-csv-").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    builder.tempfile_in(dir)
}
