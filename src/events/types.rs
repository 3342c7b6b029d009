//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the grouping pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Collection phase events
    Scan(ScanEvent),
    /// Fingerprinting phase events
    Hash(HashEvent),
    /// Relocation phase events
    Move(MoveEvent),
    /// Run-level events
    Run(RunEvent),
}

/// Events during the collection phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Collection has started
    Started { root: PathBuf },
    /// A candidate image was found
    ImageFound { path: PathBuf },
    /// Collection completed
    Completed { total_images: usize },
}

/// Events during the fingerprinting phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HashEvent {
    /// Fingerprinting has started
    Started { total_images: usize },
    /// Progress update as outcomes arrive at the aggregator
    Progress(HashProgress),
    /// An image was fingerprinted
    ImageHashed { path: PathBuf },
    /// An image could not be fingerprinted; the run continues
    Failed { path: PathBuf, message: String },
    /// Fingerprinting completed
    Completed { hashed: usize, failed: usize },
}

/// Progress information during fingerprinting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashProgress {
    /// Number of outcomes received so far (successes and failures)
    pub completed: usize,
    /// Total number of images submitted to the pool
    pub total: usize,
    /// The image the latest outcome belongs to
    pub current_path: PathBuf,
}

/// Events during the relocation phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MoveEvent {
    /// Relocation has started
    Started { total_groups: usize },
    /// A fingerprint directory was created
    DirectoryCreated { path: PathBuf },
    /// A file was moved into its fingerprint directory
    FileMoved { from: PathBuf, to: PathBuf },
    /// Relocation completed
    Completed { files_moved: usize },
}

/// Run-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEvent {
    /// The run has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: RunPhase },
    /// The run completed successfully
    Completed { summary: RunSummary },
    /// The run hit a fatal error
    Error { message: String },
}

/// Phases of a full run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Collecting,
    Hashing,
    Relocating,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total candidate images collected
    pub total_images: usize,
    /// Number of fingerprint groups materialized
    pub groups: usize,
    /// Number of files moved into fingerprint directories
    pub files_moved: usize,
    /// Number of per-file fingerprinting failures
    pub failures: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Collecting => write!(f, "Collecting"),
            RunPhase::Hashing => write!(f, "Hashing"),
            RunPhase::Relocating => write!(f, "Relocating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Hash(HashEvent::Progress(HashProgress {
            completed: 10,
            total: 50,
            current_path: PathBuf::from("/photos/a.jpg"),
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Hash(HashEvent::Progress(p)) => {
                assert_eq!(p.completed, 10);
                assert_eq!(p.total, 50);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn run_summary_is_serializable() {
        let summary = RunSummary {
            total_images: 1000,
            groups: 40,
            files_moved: 998,
            failures: 2,
            duration_ms: 5000,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("998"));
    }

    #[test]
    fn run_phase_display() {
        assert_eq!(RunPhase::Collecting.to_string(), "Collecting");
        assert_eq!(RunPhase::Hashing.to_string(), "Hashing");
        assert_eq!(RunPhase::Relocating.to_string(), "Relocating");
    }
}
