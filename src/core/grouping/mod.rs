//! # Grouping Module
//!
//! The fingerprint → member-paths map built by the aggregator.
//!
//! The map has exactly one writer (the aggregator) and is fully built
//! before any filesystem mutation begins. Iteration order is
//! deterministic: groups come out ordered by fingerprint, members sorted
//! lexicographically by path.

use crate::core::hasher::Fingerprint;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Mapping from fingerprint to the paths that share it
#[derive(Debug, Default)]
pub struct Grouping {
    groups: BTreeMap<Fingerprint, Vec<PathBuf>>,
}

impl Grouping {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path under its fingerprint
    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf) {
        self.groups.entry(fingerprint).or_default().push(path);
    }

    /// Number of distinct fingerprint groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether any group exists
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of member files across all groups
    pub fn total_files(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Drain into `(fingerprint, members)` pairs ordered by fingerprint,
    /// with each member list sorted lexicographically by path.
    ///
    /// This is the order every observable action (moves, progress lines)
    /// follows, so runs over the same input are reproducible.
    pub fn into_sorted_groups(self) -> Vec<(Fingerprint, Vec<PathBuf>)> {
        self.groups
            .into_iter()
            .map(|(fingerprint, mut members)| {
                members.sort();
                (fingerprint, members)
            })
            .collect()
    }
}
