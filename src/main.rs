//! Job pilot: resume-driven job matching and application tailoring

mod cli;
mod config;
mod error;
mod input;
mod jobs;
mod output;
mod processing;
mod submission;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Preferences;
use error::{JobPilotError, Result};
use jobs::{gather_jobs, JobSource, JsonJobSource};
use log::{error, info};
use output::MatchReporter;
use processing::profile::{merged_vocabulary, ResumeStructurer};
use processing::scorer::{MatchResult, MatchScorer};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use submission::{apply_matches, JsonlApplicationLog};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            resume,
            jobs,
            config,
            cover_letter_template,
            artifacts_dir,
            log_path,
            top,
            auto_approve,
            dry_run,
        } => run_pipeline(
            resume,
            jobs,
            config,
            cover_letter_template,
            artifacts_dir,
            log_path,
            top,
            auto_approve,
            dry_run,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show { config } => {
                let prefs = Preferences::load(&config)?;
                println!("{}", serde_json::to_string_pretty(&prefs)?);
                Ok(())
            }
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn run_pipeline(
    resume: PathBuf,
    jobs: PathBuf,
    config: PathBuf,
    cover_letter_template: PathBuf,
    artifacts_dir: PathBuf,
    log_path: PathBuf,
    top: usize,
    auto_approve: bool,
    dry_run: bool,
) -> Result<()> {
    let prefs = Preferences::load(&config)?;
    info!("Loaded preferences from {}", config.display());

    let extra_skills: Vec<String> = prefs
        .required_skills
        .iter()
        .chain(prefs.optional_skills.iter())
        .cloned()
        .collect();
    let vocabulary = merged_vocabulary(&extra_skills);

    let structurer = ResumeStructurer::new();
    let profile = structurer.structure_file(&resume, &vocabulary)?;
    info!(
        "Structured resume: {} skills, {} experience lines",
        profile.skills.len(),
        profile.experience.len()
    );

    let source = JsonJobSource::new(&jobs);
    let sources: [&dyn JobSource; 1] = [&source];
    let postings = gather_jobs(&sources, &prefs.target_titles, &prefs.target_locations)?;
    info!("Gathered {} postings", postings.len());

    let scorer = MatchScorer::new();
    let matches = scorer.rank(&profile, &postings, &prefs);

    let reporter = MatchReporter::new(true, top);
    reporter.print_top_matches(&matches, prefs.min_score);

    if dry_run {
        info!("Dry run: no artifacts or log entries written");
        return Ok(());
    }

    let template = std::fs::read_to_string(&cover_letter_template).map_err(|e| {
        JobPilotError::DocumentUnreadable(format!(
            "{}: {}",
            cover_letter_template.display(),
            e
        ))
    })?;

    let mut log = JsonlApplicationLog::open(&log_path)?;
    let mut review = |m: &MatchResult| auto_approve || prompt_for_approval(m);
    let records = apply_matches(
        &matches,
        &profile,
        &prefs,
        &template,
        &artifacts_dir,
        &mut log,
        &mut review,
    )?;

    println!(
        "Completed {} application(s). Log stored in {}",
        records.len(),
        log_path.display()
    );
    Ok(())
}

/// Interactive review gate: ask on stdin, default to declining.
fn prompt_for_approval(m: &MatchResult) -> bool {
    print!(
        "Apply to {} at {}? (score {:.2}, skills: {}) [y/N]: ",
        m.posting.title,
        m.posting.company,
        m.score,
        m.breakdown.skill_overlap.join(", ")
    );
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut reply = String::new();
    if std::io::stdin().read_line(&mut reply).is_err() {
        return false;
    }
    matches!(reply.trim().to_lowercase().as_str(), "y" | "yes")
}
