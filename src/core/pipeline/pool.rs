//! Bounded worker pool for parallel fingerprinting.
//!
//! Fan-out: a feeder thread pushes every candidate path into a bounded
//! job channel; up to `width` worker threads pull paths and fingerprint
//! them. Fan-in: every worker emits exactly one [`Outcome`] per path it
//! takes - success or failure - into a bounded result channel consumed by
//! the aggregator.
//!
//! Pool liveness is independent of per-file failure: a worker converts a
//! bad file into `Outcome::Failed` and moves on to the next job. Workers
//! only exit when the job channel is closed and drained.

use crate::core::hasher::{Fingerprint, FingerprintHasher};
use crate::error::HashError;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::path::PathBuf;

/// Default number of concurrent fingerprinting workers
pub const DEFAULT_WORKERS: usize = 100;

/// The result of processing one submitted path
#[derive(Debug)]
pub enum Outcome {
    /// The image was decoded and fingerprinted
    Hashed {
        path: PathBuf,
        fingerprint: Fingerprint,
    },
    /// The image could not be processed; the pool keeps going
    Failed { path: PathBuf, error: HashError },
}

impl Outcome {
    /// The path this outcome belongs to
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::Hashed { path, .. } => path,
            Outcome::Failed { path, .. } => path,
        }
    }
}

/// Run the pool over `paths`, handing each outcome to `consume`.
///
/// `consume` runs on the calling thread and receives exactly
/// `paths.len()` outcomes before this function returns - the single
/// consumer side of the fan-in. Both channels are bounded by `width`,
/// so at most roughly `width` files are open or decoded at once: a full
/// job channel blocks the feeder, a full result channel blocks workers.
pub fn run<T>(
    paths: Vec<PathBuf>,
    width: usize,
    hasher: &FingerprintHasher,
    consume: impl FnOnce(Receiver<Outcome>, usize) -> T,
) -> T {
    let width = width.max(1);
    let workers = width.min(paths.len()).max(1);
    let expected = paths.len();

    let (job_tx, job_rx) = bounded::<PathBuf>(width);
    let (outcome_tx, outcome_rx) = bounded::<Outcome>(width);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let outcomes = outcome_tx.clone();
            scope.spawn(move || worker_loop(jobs, outcomes, hasher));
        }
        // Workers hold the only remaining clones; dropping these lets the
        // result channel close once every worker has exited.
        drop(job_rx);
        drop(outcome_tx);

        scope.spawn(move || {
            for path in paths {
                if job_tx.send(path).is_err() {
                    break;
                }
            }
            // job_tx drops here, closing the queue so idle workers exit
        });

        consume(outcome_rx, expected)
    })
}

/// One worker: take the next path, emit exactly one outcome for it,
/// repeat until the queue is closed. Never exits early on a file error.
fn worker_loop(jobs: Receiver<PathBuf>, outcomes: Sender<Outcome>, hasher: &FingerprintHasher) {
    for path in jobs.iter() {
        let outcome = match hasher.fingerprint_file(&path) {
            Ok(fingerprint) => Outcome::Hashed { path, fingerprint },
            Err(error) => Outcome::Failed { path, error },
        };
        if outcomes.send(outcome).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    // Seed 0 is a brightness ramp (difference hash all ones), seed 1 the
    // inverse ramp (all zeros), so distinct seeds give distinct hashes.
    fn test_image(seed: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, move |x, y| {
            let v = match seed % 3 {
                0 => (x * 4) as u8,
                1 => 255 - (x * 4) as u8,
                _ => {
                    if (x / 8 + y / 8) % 2 == 0 {
                        255
                    } else {
                        0
                    }
                }
            };
            Rgb([v, v, v])
        }))
    }

    fn save_image(dir: &Path, name: &str, seed: u32) -> PathBuf {
        let path = dir.join(name);
        test_image(seed).save(&path).unwrap();
        path
    }

    fn save_corrupt(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not an image").unwrap();
        path
    }

    fn collect_outcomes(paths: Vec<PathBuf>, width: usize) -> Vec<Outcome> {
        let hasher = FingerprintHasher::new();
        run(paths, width, &hasher, |outcomes, expected| {
            let mut collected = Vec::with_capacity(expected);
            for _ in 0..expected {
                match outcomes.recv() {
                    Ok(outcome) => collected.push(outcome),
                    Err(_) => break,
                }
            }
            collected
        })
    }

    #[test]
    fn every_path_yields_exactly_one_outcome() {
        let temp_dir = TempDir::new().unwrap();
        let paths = vec![
            save_image(temp_dir.path(), "a.png", 0),
            save_image(temp_dir.path(), "b.png", 1),
            save_corrupt(temp_dir.path(), "c.png"),
            save_image(temp_dir.path(), "d.png", 0),
        ];

        let outcomes = collect_outcomes(paths.clone(), 4);

        assert_eq!(outcomes.len(), paths.len());
        let mut seen: Vec<_> = outcomes.iter().map(|o| o.path().clone()).collect();
        seen.sort();
        let mut expected = paths;
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn failures_do_not_stop_the_pool() {
        let temp_dir = TempDir::new().unwrap();
        // Single worker: if the bad file killed its loop, the valid files
        // queued after it would never produce outcomes.
        let paths = vec![
            save_corrupt(temp_dir.path(), "bad.png"),
            save_image(temp_dir.path(), "after1.png", 0),
            save_image(temp_dir.path(), "after2.png", 1),
        ];

        let outcomes = collect_outcomes(paths, 1);

        assert_eq!(outcomes.len(), 3);
        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Failed { .. }))
            .count();
        assert_eq!(failed, 1);
    }

    #[test]
    fn identical_images_hash_identically_across_workers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = vec![
            save_image(temp_dir.path(), "one.png", 0),
            save_image(temp_dir.path(), "two.png", 0),
        ];

        let outcomes = collect_outcomes(paths, 2);

        let fingerprints: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Hashed { fingerprint, .. } => Some(fingerprint.clone()),
                Outcome::Failed { .. } => None,
            })
            .collect();
        assert_eq!(fingerprints.len(), 2);
        assert_eq!(fingerprints[0], fingerprints[1]);
    }

    #[test]
    fn width_larger_than_job_count_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let paths = vec![save_image(temp_dir.path(), "only.png", 0)];

        let outcomes = collect_outcomes(paths, 100);
        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn zero_width_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let paths = vec![save_image(temp_dir.path(), "only.png", 0)];

        let outcomes = collect_outcomes(paths, 0);
        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn empty_input_completes_immediately() {
        let outcomes = collect_outcomes(Vec::new(), 8);
        assert!(outcomes.is_empty());
    }
}
