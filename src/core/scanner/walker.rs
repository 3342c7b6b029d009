//! Directory walking implementation using walkdir.

use super::{filter::ImageFilter, ImageFile};
use crate::core::relocate::RELOCATION_DIR;
use crate::error::ScanError;
use crate::events::{Event, EventSender, ScanEvent};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Configuration for the directory scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories
    pub include_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            include_hidden: false,
        }
    }
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let filter = ImageFilter::new().with_hidden(config.include_hidden);
        Self { config, filter }
    }

    /// Collect all candidate images under `root`, sorted by path.
    ///
    /// Any walk error is fatal: the run must abort before hashing starts
    /// rather than group an incomplete collection.
    pub fn scan(&self, root: &Path) -> Result<Vec<ImageFile>, ScanError> {
        self.scan_with_events(root, &crate::events::null_sender())
    }

    /// Scan with progress reporting via events
    pub fn scan_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<Vec<ImageFile>, ScanError> {
        if !root.exists() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        events.send(Event::Scan(ScanEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut images = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry_result in walker {
            let entry = entry_result.map_err(|e| walk_error(root, e))?;

            if entry.file_type().is_dir() {
                continue;
            }
            if !self.filter.should_include(entry.path()) {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| walk_error(root, e))?;
            let image = ImageFile {
                path: entry.path().to_path_buf(),
                size: metadata.len(),
            };

            events.send(Event::Scan(ScanEvent::ImageFound {
                path: image.path.clone(),
            }));

            images.push(image);
        }

        // Deterministic candidate order regardless of walk order
        images.sort_by(|a, b| a.path.cmp(&b.path));

        events.send(Event::Scan(ScanEvent::Completed {
            total_images: images.len(),
        }));

        Ok(images)
    }

    /// Directory-level pruning: the relocation root is never entered, and
    /// hidden directories are skipped unless configured otherwise.
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();

        if entry.depth() == 1 && name == RELOCATION_DIR {
            return false;
        }
        if !self.config.include_hidden && name.starts_with('.') {
            return false;
        }

        true
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> ScanError {
    let path = error
        .path()
        .map(PathBuf::from)
        .unwrap_or_else(|| root.to_path_buf());
    ScanError::Walk {
        path,
        source: error.into(),
    }
}
