//! # Hasher Module
//!
//! Computes perceptual fingerprints for images.
//!
//! ## How It Works
//! 1. Decode the image (PNG or JPEG)
//! 2. Downscale and convert to grayscale
//! 3. Compute a gradient (difference) hash over pixel brightness
//!
//! Two files with identical visual content produce identical
//! fingerprints, so grouping is a plain equality comparison.

use crate::error::HashError;
use image::{DynamicImage, ImageReader};
use image_hasher::{HashAlg, Hasher, HasherConfig};
use std::fmt;
use std::path::Path;

/// Hash size in each dimension; 8x8 gives a 64-bit fingerprint
const HASH_SIZE: u32 = 8;

/// A fixed-length perceptual fingerprint, compared for exact equality.
///
/// `Display` renders stable lowercase hex, used as the destination
/// directory name for the fingerprint's group. Hex rather than the hash
/// library's base64: base64 contains `/`, which is not filesystem-safe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(pub(crate) Box<[u8]>);

impl Fingerprint {
    /// Get the raw fingerprint bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Computes fingerprints for image files.
///
/// Deterministic and side-effect free: equal image bytes give equal
/// fingerprints regardless of which worker computes them.
pub struct FingerprintHasher {
    inner: Hasher,
}

impl FingerprintHasher {
    /// Create a hasher using the gradient (difference) hash
    pub fn new() -> Self {
        let inner = HasherConfig::new()
            .hash_alg(HashAlg::Gradient)
            .hash_size(HASH_SIZE, HASH_SIZE)
            .to_hasher();
        Self { inner }
    }

    /// Fingerprint a single file.
    ///
    /// The file handle is scoped to this call: it is opened here and
    /// released when the function returns, before the caller takes its
    /// next job. Open failures and undecodable content are per-file
    /// errors, not crashes.
    pub fn fingerprint_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|source| HashError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let image = reader.decode().map_err(|e| HashError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(self.fingerprint_image(&image))
    }

    /// Fingerprint an already-decoded image
    pub fn fingerprint_image(&self, image: &DynamicImage) -> Fingerprint {
        Fingerprint(self.inner.hash_image(image).as_bytes().into())
    }
}

impl Default for FingerprintHasher {
    fn default() -> Self {
        Self::new()
    }
}
