//! Validate command implementation.

use std::process::ExitCode;

use anyhow::{Context, Result};
use chiptone_spec::{validate_melody, Melody};
use colored::Colorize;

/// Validates a melody spec file without rendering it.
///
/// # Returns
/// Exit code: 0 if the melody is valid, 1 otherwise
pub fn run(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let melody = match Melody::from_file(spec_path)
        .with_context(|| format!("failed to load melody spec: {}", spec_path))
    {
        Ok(melody) => melody,
        Err(err) => {
            println!("\n{} {:#}", "INVALID".red().bold(), err);
            return Ok(ExitCode::from(1));
        }
    };

    match validate_melody(&melody) {
        Ok(()) => {
            println!(
                "\n{} {} ({} voice(s), {} note(s))",
                "VALID".green().bold(),
                melody.name,
                melody.voices.len(),
                melody.note_count()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let path_info = err
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "\n{} {}{}",
                "INVALID".red().bold(),
                err.message,
                path_info.dimmed()
            );
            Ok(ExitCode::from(1))
        }
    }
}
