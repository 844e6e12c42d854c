//! List command implementation.

use std::process::ExitCode;

use anyhow::Result;
use chiptone_spec::themes;
use colored::Colorize;

/// Prints the built-in themes with their voice layout and duration.
pub fn run() -> Result<ExitCode> {
    println!("{}", "Built-in melodies:".cyan().bold());

    for melody in themes::all() {
        let description = melody.description.as_deref().unwrap_or("");
        println!(
            "  {} - {} voice(s), {} note(s), {:.1}s",
            melody.name.green(),
            melody.voices.len(),
            melody.note_count(),
            melody.duration_ms() / 1000.0
        );
        if !description.is_empty() {
            println!("    {}", description.dimmed());
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_succeeds() {
        assert_eq!(run().unwrap(), ExitCode::SUCCESS);
    }
}
