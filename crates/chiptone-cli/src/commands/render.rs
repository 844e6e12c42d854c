//! Render command implementation.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use chiptone_spec::validate_melody;
use chiptone_synth::{render_to_file, SynthError};
use colored::Colorize;

use crate::input::load_melody;

/// Runs the render command.
///
/// # Arguments
/// * `theme` - Built-in theme name, if rendering a built-in
/// * `spec_path` - Melody JSON path, if rendering from a file
/// * `output` - Destination WAV path
/// * `sample_rate` - Output sample rate in Hz
///
/// # Returns
/// Exit code: 0 success, 1 melody error, 2 render/write error
pub fn run(
    theme: Option<&str>,
    spec_path: Option<&str>,
    output: &str,
    sample_rate: u32,
) -> Result<ExitCode> {
    let start = Instant::now();

    let (melody, source) = load_melody(theme, spec_path)?;

    println!(
        "{} {} ({})",
        "Rendering:".cyan().bold(),
        melody.name,
        source.as_str()
    );
    println!("{} {} Hz", "Sample rate:".dimmed(), sample_rate);

    if let Err(err) = validate_melody(&melody) {
        print_validation_error(&err);
        return Ok(ExitCode::from(1));
    }

    match render_to_file(&melody, sample_rate, output) {
        Ok(result) => {
            let duration_ms = start.elapsed().as_millis();
            println!(
                "\n{} {} ({:.2}s of audio, {} samples) in {}ms",
                "SUCCESS".green().bold(),
                output,
                result.duration_seconds(),
                result.num_samples(),
                duration_ms
            );
            println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash);
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ SynthError::InvalidNote { .. }) => {
            println!("\n{} {}", "RENDER FAILED".red().bold(), err);
            Ok(ExitCode::from(1))
        }
        Err(err) => {
            println!("\n{} {}", "WRITE FAILED".red().bold(), err);
            Ok(ExitCode::from(2))
        }
    }
}

fn print_validation_error(err: &chiptone_spec::ValidationError) {
    let path_info = err
        .path
        .as_ref()
        .map(|p| format!(" at {}", p))
        .unwrap_or_default();
    println!(
        "\n{} {}{}",
        "INVALID MELODY".red().bold(),
        err.message,
        path_info.dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    #[test]
    fn renders_a_builtin_theme_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fanfare.wav");

        let code = run(Some("fanfare"), None, output.to_str().unwrap(), 22050).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn invalid_spec_file_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("bad.json");
        // Structurally valid JSON, invalid melody: no voices.
        std::fs::write(&spec, r#"{"name": "empty", "voices": []}"#).unwrap();
        let output = dir.path().join("out.wav");

        let code = run(None, spec.to_str(), output.to_str().unwrap(), 22050).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!output.exists());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.wav");
        assert!(run(Some("polka"), None, output.to_str().unwrap(), 22050).is_err());
    }

    #[test]
    fn unwritable_output_exits_with_two() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("out.wav");

        let code = run(Some("fanfare"), None, missing.to_str().unwrap(), 22050).unwrap();
        assert_eq!(code, ExitCode::from(2));
    }
}
