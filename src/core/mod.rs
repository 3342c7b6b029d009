//! # Core Module
//!
//! The UI-agnostic grouping engine.
//!
//! ## Modules
//! - `scanner` - Discovers candidate photos under the scan root
//! - `hasher` - Computes perceptual fingerprints
//! - `grouping` - The fingerprint -> paths map built during aggregation
//! - `pipeline` - Worker pool, aggregator, and run orchestration
//! - `relocate` - Moves groups into fingerprint-named directories

pub mod grouping;
pub mod hasher;
pub mod pipeline;
pub mod relocate;
pub mod scanner;

// Re-export commonly used types
pub use grouping::Grouping;
pub use hasher::{Fingerprint, FingerprintHasher};
pub use pipeline::{HashFailure, Pipeline, RunResult};
pub use relocate::{MoveRecord, RELOCATION_DIR};
pub use scanner::ImageFile;
