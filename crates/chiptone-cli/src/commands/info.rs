//! Info command implementation.

use std::process::ExitCode;

use anyhow::Result;
use chiptone_spec::validate_melody;
use chiptone_synth::render_melody;
use colored::Colorize;

use crate::input::load_melody;

/// Prints a melody's structure and the metadata of an in-memory render.
///
/// The render never touches disk; its PCM hash is printed so callers can
/// verify determinism across machines without comparing files.
pub fn run(theme: Option<&str>, spec_path: Option<&str>, sample_rate: u32) -> Result<ExitCode> {
    let (melody, source) = load_melody(theme, spec_path)?;

    println!(
        "{} {} ({})",
        "Melody:".cyan().bold(),
        melody.name,
        source.as_str()
    );
    if let Some(description) = &melody.description {
        println!("{} {}", "Description:".dimmed(), description);
    }
    println!("{} {}", "Seed:".dimmed(), melody.seed);

    for (i, voice) in melody.voices.iter().enumerate() {
        let channels: Vec<&str> = {
            let mut names: Vec<&str> = voice.notes.iter().map(|n| n.channel.name()).collect();
            names.dedup();
            names
        };
        println!(
            "  voice {} - volume {:.2}, {} note(s), {:.1}s, channels: {}",
            i,
            voice.volume,
            voice.notes.len(),
            voice.duration_ms() / 1000.0,
            channels.join("/")
        );
    }

    if let Err(err) = validate_melody(&melody) {
        println!("\n{} {}", "INVALID".red().bold(), err);
        return Ok(ExitCode::from(1));
    }

    match render_melody(&melody, sample_rate) {
        Ok(result) => {
            println!(
                "\n{} {:.2}s at {} Hz ({} samples)",
                "Rendered:".cyan().bold(),
                result.duration_seconds(),
                sample_rate,
                result.num_samples()
            );
            println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("\n{} {}", "RENDER FAILED".red().bold(), err);
            Ok(ExitCode::from(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_for_a_builtin_theme() {
        let code = run(Some("circus"), None, 22050).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn info_rejects_unknown_theme() {
        assert!(run(Some("polka"), None, 22050).is_err());
    }
}
