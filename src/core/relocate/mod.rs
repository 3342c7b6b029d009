//! # Relocate Module
//!
//! Moves grouped photos into fingerprint-named directories.
//!
//! Runs strictly after aggregation has finished: the grouping is
//! complete and immutable before the first filesystem mutation, so a
//! crash mid-run leaves either "nothing moved" or "some whole-or-partial
//! groups moved", never a corrupted grouping.
//!
//! Directory creation is idempotent; every other mutation failure is
//! fatal and aborts the remainder of the run. Files already moved stay
//! where they are - there is no rollback.

use crate::core::grouping::Grouping;
use crate::error::RelocateError;
use crate::events::{Event, EventSender, MoveEvent};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the relocation root created inside the scanned directory.
///
/// The scanner excludes this directory, so re-running the tool never
/// re-ingests files that were already grouped.
pub const RELOCATION_DIR: &str = "hashed";

/// One completed move
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// What the relocation phase did
#[derive(Debug, Default)]
pub struct RelocateReport {
    /// Every completed move, in execution order
    pub moves: Vec<MoveRecord>,
    /// Number of fingerprint directories that were newly created
    pub directories_created: usize,
}

/// Move every group into `<root>/hashed/<fingerprint>/`.
///
/// Groups are processed in fingerprint order and members in path order,
/// so move order is reproducible for a given input set. Singleton groups
/// are materialized like any other.
pub fn relocate(
    root: &Path,
    grouping: Grouping,
    events: &EventSender,
) -> Result<RelocateReport, RelocateError> {
    let mut report = RelocateReport::default();

    events.send(Event::Move(MoveEvent::Started {
        total_groups: grouping.len(),
    }));

    let relocation_root = root.join(RELOCATION_DIR);
    create_dir_idempotent(&relocation_root)?;

    for (fingerprint, members) in grouping.into_sorted_groups() {
        let group_dir = relocation_root.join(fingerprint.to_string());
        if create_dir_idempotent(&group_dir)? {
            report.directories_created += 1;
            events.send(Event::Move(MoveEvent::DirectoryCreated {
                path: group_dir.clone(),
            }));
        }

        for path in members {
            let destination = unique_destination(&group_dir, &path);
            fs::rename(&path, &destination).map_err(|source| RelocateError::Move {
                from: path.clone(),
                to: destination.clone(),
                source,
            })?;

            events.send(Event::Move(MoveEvent::FileMoved {
                from: path.clone(),
                to: destination.clone(),
            }));
            report.moves.push(MoveRecord {
                from: path,
                to: destination,
            });
        }
    }

    events.send(Event::Move(MoveEvent::Completed {
        files_moved: report.moves.len(),
    }));

    Ok(report)
}

/// Create a directory, treating "already exists" as success.
///
/// Returns whether the directory was newly created.
fn create_dir_idempotent(path: &Path) -> Result<bool, RelocateError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(RelocateError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Destination path for `source` inside `dir`, preserving the base
/// filename. If the name is taken (two group members share a basename,
/// or a previous run left a file behind), a numeric suffix goes before
/// the extension: `img.jpg`, `img-1.jpg`, `img-2.jpg`, ...
fn unique_destination(dir: &Path, source: &Path) -> PathBuf {
    let file_name = source.file_name().unwrap_or_default();
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source.extension().map(|e| e.to_string_lossy().into_owned());

    let mut counter = 1u32;
    loop {
        let name = match &extension {
            Some(ext) => format!("{stem}-{counter}.{ext}"),
            None => format!("{stem}-{counter}"),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
