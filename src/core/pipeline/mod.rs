//! # Pipeline Module
//!
//! Orchestrates a full grouping run:
//! `Collecting -> Hashing -> Relocating -> Done`.
//!
//! Per-file fingerprinting failures are recorded and the run proceeds;
//! only collection and relocation errors are fatal. The grouping is
//! fully built before the first filesystem mutation (compute, then act).

mod aggregate;
mod pool;

pub use aggregate::HashFailure;
pub use pool::{Outcome, DEFAULT_WORKERS};

use crate::core::hasher::FingerprintHasher;
use crate::core::relocate::{self, MoveRecord};
use crate::core::scanner::{ScanConfig, WalkDirScanner};
use crate::error::{GrouperError, Result};
use crate::events::{null_sender, Event, EventSender, HashEvent, RunEvent, RunPhase, RunSummary};
use std::path::PathBuf;
use std::time::Instant;

/// Configuration for a grouping run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory to scan and group
    pub root: PathBuf,
    /// Worker pool width for the hashing phase
    pub workers: usize,
    /// Scanner configuration
    pub scan_config: ScanConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            workers: DEFAULT_WORKERS,
            scan_config: ScanConfig::default(),
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Set the directory to scan
    pub fn root(mut self, root: PathBuf) -> Self {
        self.config.root = root;
        self
    }

    /// Set the worker pool width
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Include hidden files and directories
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.scan_config.include_hidden = include;
        self
    }

    /// Follow symbolic links while scanning
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.scan_config.follow_symlinks = follow;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            config: self.config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunResult {
    /// Total candidate images collected
    pub total_images: usize,
    /// Number of fingerprint groups materialized
    pub groups: usize,
    /// Every completed move, in execution order
    pub moves: Vec<MoveRecord>,
    /// Per-file fingerprinting failures
    pub failures: Vec<HashFailure>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// The photo grouping pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<RunResult> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<RunResult> {
        let start_time = Instant::now();

        events.send(Event::Run(RunEvent::Started));

        // Phase 1: Collecting
        events.send(Event::Run(RunEvent::PhaseChanged {
            phase: RunPhase::Collecting,
        }));

        let scanner = WalkDirScanner::new(self.config.scan_config.clone());
        let images = scanner
            .scan_with_events(&self.config.root, events)
            .map_err(|e| report_fatal(events, e.into()))?;
        let total_images = images.len();

        if images.is_empty() {
            let summary = RunSummary {
                total_images: 0,
                groups: 0,
                files_moved: 0,
                failures: 0,
                duration_ms: start_time.elapsed().as_millis() as u64,
            };
            events.send(Event::Run(RunEvent::Completed {
                summary: summary.clone(),
            }));

            return Ok(RunResult {
                total_images: 0,
                groups: 0,
                moves: Vec::new(),
                failures: Vec::new(),
                duration_ms: summary.duration_ms,
            });
        }

        // Phase 2: Hashing (fan-out to the pool, fan-in on this thread)
        events.send(Event::Run(RunEvent::PhaseChanged {
            phase: RunPhase::Hashing,
        }));
        events.send(Event::Hash(HashEvent::Started { total_images }));

        let paths: Vec<PathBuf> = images.into_iter().map(|image| image.path).collect();
        let hasher = FingerprintHasher::new();
        let (grouping, failures) = pool::run(paths, self.config.workers, &hasher, |rx, expected| {
            aggregate::aggregate(rx, expected, events)
        });
        let groups = grouping.len();

        // Phase 3: Relocating (grouping is complete before any mutation)
        events.send(Event::Run(RunEvent::PhaseChanged {
            phase: RunPhase::Relocating,
        }));

        let report = relocate::relocate(&self.config.root, grouping, events)
            .map_err(|e| report_fatal(events, e.into()))?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let summary = RunSummary {
            total_images,
            groups,
            files_moved: report.moves.len(),
            failures: failures.len(),
            duration_ms,
        };
        events.send(Event::Run(RunEvent::Completed { summary }));

        Ok(RunResult {
            total_images,
            groups,
            moves: report.moves,
            failures,
            duration_ms,
        })
    }

}

/// Report a fatal error before propagating it
fn report_fatal(events: &EventSender, error: GrouperError) -> GrouperError {
    events.send(Event::Run(RunEvent::Error {
        message: error.to_string(),
    }));
    error
}
