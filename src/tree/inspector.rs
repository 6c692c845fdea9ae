//! File inspection: metadata and BLAKE3 content fingerprints

use crate::error::StorageError;
use crate::tree::node::FileInfo;
use crate::types::Hash;
use blake3::Hasher;
use std::fs::{File, Metadata};
use std::io::Read;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument, warn};

/// Read size used while hashing; bounds memory regardless of file size.
pub const CHUNK_SIZE: usize = 4096;

/// Inspect a filesystem entry.
///
/// Returns `None` (after logging) when the entry can't be stat'ed. A file
/// whose content can't be read still reports its metadata, with no
/// fingerprint.
#[instrument(level = "trace", skip_all, fields(path = %path.display()))]
pub fn inspect(path: &Path) -> Option<FileInfo> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(path = %path.display(), "Failed to stat entry: {}", e);
            return None;
        }
    };

    let content_hash = if metadata.is_file() {
        match compute_file_hash(path) {
            Ok(hash) => Some(hash),
            Err(e) => {
                debug!(path = %path.display(), "Content unreadable, no fingerprint: {}", e);
                None
            }
        }
    } else {
        None
    };

    // Report the post-read access time.
    let metadata = match content_hash {
        Some(_) => std::fs::metadata(path).unwrap_or(metadata),
        None => metadata,
    };

    Some(FileInfo {
        size: metadata.len(),
        size_on_disk: size_on_disk(&metadata),
        created: created_secs(&metadata),
        modified: epoch_secs(metadata.modified().ok()),
        accessed: epoch_secs(metadata.accessed().ok()),
        content_hash,
    })
}

/// Hash a whole file in [`CHUNK_SIZE`] reads.
pub fn compute_file_hash(path: &Path) -> Result<Hash, StorageError> {
    let mut file = File::open(path).map_err(|e| StorageError::from_io(path, e))?;
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StorageError::from_io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(*hasher.finalize().as_bytes())
}

/// Compute content hash for in-memory bytes
///
/// Produces the same digest as [`compute_file_hash`] over a file holding
/// `content`.
pub fn compute_content_hash(content: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

#[cfg(unix)]
fn size_on_disk(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.blocks() * 512
}

#[cfg(not(unix))]
fn size_on_disk(metadata: &Metadata) -> u64 {
    metadata.len()
}

#[cfg(unix)]
fn created_secs(metadata: &Metadata) -> f64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ctime() as f64 + metadata.ctime_nsec() as f64 / 1e9
}

#[cfg(not(unix))]
fn created_secs(metadata: &Metadata) -> f64 {
    epoch_secs(metadata.created().or_else(|_| metadata.modified()).ok())
}

/// Seconds since the epoch; negative for times before it, 0 when unknown.
fn epoch_secs(time: Option<SystemTime>) -> f64 {
    match time.map(|t| t.duration_since(UNIX_EPOCH)) {
        Some(Ok(elapsed)) => elapsed.as_secs_f64(),
        Some(Err(before)) => -before.duration().as_secs_f64(),
        None => 0.0,
    }
}
