use std::fs;
use std::path::Path;

use crate::error::MalsitesError;

pub fn read_site_list(path: &Path) -> Result<String, MalsitesError> {
    fs::read_to_string(path).map_err(|err| MalsitesError::InputRead {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Create or truncate `path` and write `contents` verbatim.
pub fn write_filters(path: &Path, contents: &str) -> Result<(), MalsitesError> {
    fs::write(path, contents).map_err(|err| MalsitesError::OutputWrite {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
