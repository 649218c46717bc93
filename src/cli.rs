//! CLI interface for the job pilot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-pilot")]
#[command(about = "Resume-driven job matching and application tailoring")]
#[command(
    long_about = "Structure a resume, score it against a batch of job postings, and produce tailored cover letters for the matches that clear the acceptance threshold"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score postings against a resume and submit accepted matches
    Run {
        /// Path to resume file (TXT, MD, PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job postings fixture (JSON array)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Path to preferences JSON
        #[arg(short, long)]
        config: PathBuf,

        /// Path to cover letter template with placeholders
        #[arg(short = 't', long)]
        cover_letter_template: PathBuf,

        /// Directory for rendered cover letter artifacts
        #[arg(long, default_value = "artifacts/cover_letters")]
        artifacts_dir: PathBuf,

        /// Path to the append-only application log
        #[arg(long, default_value = "logs/applications.jsonl")]
        log_path: PathBuf,

        /// How many ranked matches to print
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Skip review prompts even if review_mode is on
        #[arg(long)]
        auto_approve: bool,

        /// Score and report without writing artifacts or log entries
        #[arg(long)]
        dry_run: bool,
    },

    /// Preference inspection commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective preferences for a config file
    Show {
        /// Path to preferences JSON
        #[arg(short, long)]
        config: PathBuf,
    },
}
