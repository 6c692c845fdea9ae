//! Root path resolution and node naming

use crate::error::StorageError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Resolve a user-supplied root to an absolute, symlink-free path.
///
/// Surrounding whitespace is trimmed. Fails if the path is empty or does not
/// exist.
pub fn resolve_root(input: &str) -> Result<PathBuf, StorageError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StorageError::InvalidPath("empty path".to_string()));
    }

    // dunce avoids UNC (\\?\) prefixes on Windows
    let canonical = dunce::canonicalize(trimmed)
        .map_err(|e| StorageError::from_io(Path::new(trimmed), e))?;

    Ok(PathBuf::from(normalize_path_string(&canonical.to_string_lossy())))
}

/// Remove trailing separators, keeping a bare root intact.
pub fn normalize_path_string(path: &str) -> String {
    let mut result = path.to_string();
    while (result.ends_with('/') || result.ends_with('\\'))
        && Path::new(&result).parent().is_some()
    {
        result.pop();
    }
    result
}

/// Name recorded on a node: the last path segment, or the whole path for a
/// root such as `/` or `C:\`.
///
/// Bytes that aren't valid UTF-8 are rendered as `\xNN`, so distinct names
/// stay distinct in output.
pub fn node_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => display_name(name),
        None => path.to_string_lossy().to_string(),
    }
}

/// The raw last segment of `path`, kept only when it isn't valid UTF-8.
pub fn raw_name(path: &Path) -> Option<OsString> {
    path.file_name()
        .filter(|name| name.to_str().is_none())
        .map(OsStr::to_os_string)
}

#[cfg(unix)]
fn display_name(name: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;

    let mut bytes = name.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let invalid = e.error_len().unwrap_or(rest.len());
                for byte in &rest[..invalid] {
                    out.push_str(&format!("\\x{:02x}", byte));
                }
                bytes = &rest[invalid..];
            }
        }
    }
}

#[cfg(not(unix))]
fn display_name(name: &OsStr) -> String {
    name.to_string_lossy().to_string()
}
