//! Command-line surface: arguments, console messages and exit codes.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use flashcard_core::{convert, default_output_path, ConversionReport, ConvertError, ErrorKind};

#[derive(Parser, Debug)]
#[command(
    name = "flashcard-csv",
    version,
    about = "Convert JSON flashcard notes to a CSV file for flashcard apps."
)]
pub struct Cli {
    /// The path to the input JSON file (e.g. "my_notes_flashcards.json")
    pub input_file: PathBuf,

    /// The path for the output CSV file (e.g. "my_flashcards.csv").
    /// Defaults to the input file name with a .csv extension.
    #[arg(short, long = "output", value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file))
    }

    /// Run the conversion and report the outcome on the console.
    pub fn run(self) -> ExitCode {
        let output = self.output_path();
        tracing::debug!(input = %self.input_file.display(), output = %output.display(), "converting");

        match convert(&self.input_file, &output) {
            Ok(report) => {
                println!("{}", success_message(&report));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}", failure_message(&self.input_file, &err));
                ExitCode::from(err.kind().exit_code())
            }
        }
    }
}

fn success_message(report: &ConversionReport) -> String {
    format!(
        "Successfully converted {} flashcards.\nCSV file saved to: {}",
        report.count,
        report.output_path.display()
    )
}

fn failure_message(input: &Path, err: &ConvertError) -> String {
    match err.kind() {
        ErrorKind::FileNotFound => {
            format!("Error: The file '{}' was not found.", input.display())
        }
        ErrorKind::InvalidFormat => {
            format!("Error: Could not decode JSON from the file '{}': {err}", input.display())
        }
        ErrorKind::UnexpectedError => format!("An unexpected error occurred: {err}"),
    }
}
