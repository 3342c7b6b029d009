//! # Scanner Module
//!
//! Discovers candidate photo files under the scan root.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//!
//! The relocation root (`hashed/`) is excluded from every scan so a
//! second run never re-ingests files that were already grouped.
//!
//! ## Example
//! ```rust,ignore
//! use photo_grouper::core::scanner::{ScanConfig, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! let images = scanner.scan(Path::new("/Users/photos"))?;
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ScanConfig, WalkDirScanner};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a discovered candidate image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Path to the image file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}
