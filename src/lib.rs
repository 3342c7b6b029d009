//! # Photo Grouper
//!
//! Groups visually identical photos into fingerprint-named folders.
//!
//! ## How It Works
//! A bounded worker pool fingerprints every candidate image in parallel,
//! a single aggregator collects one outcome per file (success or
//! failure), and only once the grouping is complete does the relocation
//! phase move each group into `hashed/<fingerprint>/` under the scanned
//! directory. A corrupt photo is recorded and skipped; it never stops
//! the run.
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and
//! presentation layers:
//! - `core` - Scanning, fingerprinting, grouping, and relocation
//! - `events` - Event-driven progress reporting (GUI-ready)
//! - `error` - Error types separating fatal from per-file failures

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{GrouperError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
