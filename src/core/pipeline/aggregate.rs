//! Fan-in aggregation of worker outcomes.
//!
//! The aggregator is the single consumer of the result channel and the
//! single writer of the [`Grouping`]. It terminates after receiving one
//! outcome per submitted path - failures count toward completion exactly
//! like successes, so a run containing corrupt files still terminates.

use super::pool::Outcome;
use crate::core::grouping::Grouping;
use crate::error::HashError;
use crate::events::{Event, EventSender, HashEvent, HashProgress};
use crossbeam_channel::Receiver;
use std::path::PathBuf;

/// A recorded per-file fingerprinting failure
#[derive(Debug)]
pub struct HashFailure {
    /// The file that could not be fingerprinted
    pub path: PathBuf,
    /// Why it failed
    pub error: HashError,
}

/// Consume exactly `expected` outcomes and build the grouping.
///
/// Returns the finished grouping plus the failures, in arrival order.
/// Arrival order is nondeterministic under concurrency; nothing
/// observable depends on it - the grouping sorts on drain and the CLI
/// sorts the failure report before printing.
pub fn aggregate(
    outcomes: Receiver<Outcome>,
    expected: usize,
    events: &EventSender,
) -> (Grouping, Vec<HashFailure>) {
    let mut grouping = Grouping::new();
    let mut failures = Vec::new();

    for completed in 1..=expected {
        let Ok(outcome) = outcomes.recv() else {
            // All senders gone; with one outcome guaranteed per path this
            // only happens if a worker died abnormally.
            break;
        };

        events.send(Event::Hash(HashEvent::Progress(HashProgress {
            completed,
            total: expected,
            current_path: outcome.path().clone(),
        })));

        match outcome {
            Outcome::Hashed { path, fingerprint } => {
                events.send(Event::Hash(HashEvent::ImageHashed { path: path.clone() }));
                grouping.insert(fingerprint, path);
            }
            Outcome::Failed { path, error } => {
                events.send(Event::Hash(HashEvent::Failed {
                    path: path.clone(),
                    message: error.to_string(),
                }));
                failures.push(HashFailure { path, error });
            }
        }
    }

    events.send(Event::Hash(HashEvent::Completed {
        hashed: grouping.total_files(),
        failed: failures.len(),
    }));

    (grouping, failures)
}
