//! # CLI Module
//!
//! Command-line interface for the photo grouper.
//!
//! ## Usage
//! ```bash
//! # Group every photo under a directory
//! photo-group ~/Photos
//!
//! # Without per-move output
//! photo-group ~/Photos --quiet
//!
//! # With a smaller worker pool
//! photo-group ~/Photos --workers 8
//! ```

use clap::Parser;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use photo_grouper::core::pipeline::{Pipeline, RunResult, DEFAULT_WORKERS};
use photo_grouper::error::Result;
use photo_grouper::events::{Event, EventChannel, HashEvent, MoveEvent};
use std::path::PathBuf;
use std::thread;

/// Photo Grouper - move visually identical photos into shared folders
#[derive(Parser, Debug)]
#[command(name = "photo-group")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for photos
    root: PathBuf,

    /// Suppress per-move output
    #[arg(short, long)]
    quiet: bool,

    /// Number of concurrent fingerprinting workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Include hidden files and directories
    #[arg(long)]
    include_hidden: bool,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let term = Term::stderr();
    if !cli.quiet {
        term.write_line(&format!(
            "{} {}",
            style("Photo Grouper").bold().cyan(),
            style(env!("CARGO_PKG_VERSION")).dim()
        ))
        .ok();
    }

    let pipeline = Pipeline::builder()
        .root(cli.root.clone())
        .workers(cli.workers)
        .include_hidden(cli.include_hidden)
        .build();

    // Set up event handling
    let (sender, receiver) = EventChannel::new();

    let progress = if cli.quiet {
        None
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    };

    let progress_clone = progress.clone();
    let quiet = cli.quiet;

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Hash(HashEvent::Started { total_images }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_length(total_images as u64);
                        pb.set_message("fingerprinting");
                    }
                }
                Event::Hash(HashEvent::Progress(p)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_position(p.completed as u64);
                    }
                }
                Event::Hash(HashEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                Event::Move(MoveEvent::FileMoved { from, to }) => {
                    if !quiet {
                        println!(
                            "{} {} {} {}",
                            style("moved").green(),
                            from.display(),
                            style("->").dim(),
                            to.display()
                        );
                    }
                }
                _ => {}
            }
        }
    });

    // Run the pipeline; join the event thread before reporting either way
    let result = pipeline.run_with_events(&sender);
    drop(sender);
    event_thread.join().ok();

    let result = result?;
    print_summary(&term, &result);

    Ok(())
}

fn print_summary(term: &Term, result: &RunResult) {
    term.write_line("").ok();
    term.write_line(&format!("{} Grouping Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} photos scanned in {:.1}s",
        style(result.total_images).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();
    term.write_line(&format!(
        "  {} fingerprint groups",
        style(result.groups).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} photos moved",
        style(result.moves.len()).cyan()
    ))
    .ok();

    // Failures print regardless of quiet mode
    if !result.failures.is_empty() {
        term.write_line("").ok();
        term.write_line(&format!(
            "{} {} photos could not be fingerprinted:",
            style("!").yellow().bold(),
            result.failures.len()
        ))
        .ok();

        let mut failures: Vec<_> = result.failures.iter().collect();
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        for failure in failures {
            term.write_line(&format!(
                "  {} {}: {}",
                style("skipped").yellow(),
                failure.path.display(),
                failure.error
            ))
            .ok();
        }
    }
}
