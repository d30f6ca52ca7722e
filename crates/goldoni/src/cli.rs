//! Command-line interface for Goldoni.
//!
//! The CLI is built with clap and exposes the three playwriting pipelines:
//!
//! - `collaborate`: Writer/Director collaboration over a fixed round count
//! - `sketch`: two-minute micro-play with a critique/revision loop
//! - `monologue`: rewrite a saved script as a spoken-word monologue

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Model used when neither `--model` nor the config specifies one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Multi-agent LLM playwriting.
#[derive(Parser)]
#[command(name = "goldoni", version, about)]
pub struct Cli {
    /// Show detailed progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Write a full play through Writer/Director collaboration
    Collaborate {
        /// Genre of the play (e.g. "Comedy", "Thriller")
        #[arg(short, long)]
        genre: String,

        /// Theme or premise of the play
        #[arg(short, long)]
        theme: String,

        /// Overall tone (e.g. "Satirical and absurd")
        #[arg(long, default_value = "Witty")]
        tone: String,

        /// Output language for the script
        #[arg(short, long, default_value = "English")]
        language: String,

        /// Number of collaboration rounds (1-8)
        #[arg(short, long, default_value = "5")]
        rounds: u32,

        /// Model identifier (or use the default)
        #[arg(short, long)]
        model: Option<String>,

        /// File to save the final script to
        #[arg(short, long, default_value = "play_script.txt")]
        output: PathBuf,
    },

    /// Write a two-minute micro-play with a critique/revision loop
    Sketch {
        /// Theme or premise of the sketch
        #[arg(short, long)]
        theme: String,

        /// Output language for the script
        #[arg(short, long, default_value = "English")]
        language: String,

        /// Number of critique/revision iterations (0-8)
        #[arg(short, long, default_value = "2")]
        critique_rounds: u32,

        /// Model identifier (or use the default)
        #[arg(short, long)]
        model: Option<String>,

        /// File to save the final script to
        #[arg(short, long, default_value = "sketch.txt")]
        output: PathBuf,
    },

    /// Rewrite a saved script as a spoken-word monologue
    Monologue {
        /// Path to the script file to rewrite
        #[arg(short, long)]
        script: PathBuf,

        /// Output language for the monologue
        #[arg(short, long, default_value = "English")]
        language: String,

        /// Model identifier (or use the default)
        #[arg(short, long)]
        model: Option<String>,

        /// File to save the monologue to
        #[arg(short, long, default_value = "monologue.txt")]
        output: PathBuf,
    },
}
