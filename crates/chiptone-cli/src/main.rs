//! Chiptone CLI - renders chiptune melodies to WAV files.
//!
//! The binary only parses arguments; command logic lives in the library
//! crate so it can be tested directly.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use chiptone_cli::commands;
use chiptone_synth::DEFAULT_SAMPLE_RATE;

/// Chiptone - 8-bit melody renderer
#[derive(Parser)]
#[command(name = "chiptone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a melody to a WAV file
    Render {
        /// Built-in theme name (see `chiptone list`)
        #[arg(short, long)]
        melody: Option<String>,

        /// Path to a melody spec file (JSON)
        #[arg(short, long)]
        spec: Option<String>,

        /// Destination WAV path
        #[arg(short, long)]
        output: String,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// List the built-in melodies
    List,

    /// Validate a melody spec file without rendering
    Validate {
        /// Path to the melody spec file (JSON)
        #[arg(short, long)]
        spec: String,
    },

    /// Show a melody's structure and render metadata
    Info {
        /// Built-in theme name
        #[arg(short, long)]
        melody: Option<String>,

        /// Path to a melody spec file (JSON)
        #[arg(short, long)]
        spec: Option<String>,

        /// Sample rate used for the in-memory render
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            melody,
            spec,
            output,
            sample_rate,
        } => commands::render::run(melody.as_deref(), spec.as_deref(), &output, sample_rate),
        Commands::List => commands::list::run(),
        Commands::Validate { spec } => commands::validate::run(&spec),
        Commands::Info {
            melody,
            spec,
            sample_rate,
        } => commands::info::run(melody.as_deref(), spec.as_deref(), sample_rate),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
