//! CLI output: error mapping from comparison errors to the CLI surface.

use crate::error::CompareError;

/// Map a comparison error to the message printed on stderr.
pub fn map_error(e: &CompareError) -> String {
    format!("Error: {}", e)
}
