use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const ENV_MALSITES_ROOT: &str = "MALSITES_ROOT";
pub const ENV_HOME: &str = "HOME";

pub const SITE_LIST_FILE_NAME: &str = "malicious_site_list.txt";
pub const FILTER_FILE_NAME: &str = "malicious_sites_trunc.txt";

/// Environment snapshot used for path resolution.
///
/// Captured once at startup so resolution never reads the process environment
/// itself. Values stay `OsString` so non-UTF-8 directories still resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathResolutionInput {
    pub env: BTreeMap<String, OsString>,
}

impl PathResolutionInput {
    pub fn from_process() -> Self {
        Self {
            env: [ENV_MALSITES_ROOT, ENV_HOME]
                .into_iter()
                .filter_map(|key| Some((key.to_string(), env::var_os(key)?)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub base_dir: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl ResolvedPaths {
    pub fn from_base_dir(base_dir: &Path) -> Self {
        Self {
            input_file: base_dir.join(SITE_LIST_FILE_NAME),
            output_file: base_dir.join(FILTER_FILE_NAME),
            base_dir: base_dir.to_path_buf(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathResolutionError {
    #[error("base directory not set: export MALSITES_ROOT or HOME")]
    BaseDirUnset,
}

pub fn resolve_paths(input: &PathResolutionInput) -> Result<ResolvedPaths, PathResolutionError> {
    let base_dir = [ENV_MALSITES_ROOT, ENV_HOME]
        .into_iter()
        .find_map(|key| env_value(&input.env, key))
        .ok_or(PathResolutionError::BaseDirUnset)?;

    Ok(ResolvedPaths::from_base_dir(Path::new(base_dir)))
}

fn env_value<'a>(vars: &'a BTreeMap<String, OsString>, key: &str) -> Option<&'a OsStr> {
    vars.get(key)
        .map(OsString::as_os_str)
        .filter(|value| !value.to_string_lossy().trim().is_empty())
}
