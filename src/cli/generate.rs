use log::{debug, info};

use crate::adapters::hash::sha256_hex;
use crate::adapters::path::{PathResolutionInput, ResolvedPaths, resolve_paths};
use crate::adapters::site_list::{read_site_list, write_filters};
use crate::cli::interrupt;
use crate::core::truncate::select_filters;
use crate::error::MalsitesError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub written: usize,
    pub available: usize,
    pub bytes: usize,
    pub sha256: String,
}

pub fn run_generate_command(count: usize) -> Result<(), MalsitesError> {
    let paths = resolve_paths(&PathResolutionInput::from_process())?;
    let outcome = generate_filters(&paths, count, &interrupt::ensure_not_interrupted)?;

    info!(
        "wrote {} of {} filters to {} ({} bytes, sha256={})",
        outcome.written,
        outcome.available,
        paths.output_file.display(),
        outcome.bytes,
        outcome.sha256
    );
    Ok(())
}

/// Read the site list under `paths`, keep the first `count` entries and
/// overwrite the filter file. Nothing is written when validation or
/// `check_interrupt` fails.
#[allow(clippy::print_stdout)]
pub fn generate_filters(
    paths: &ResolvedPaths,
    count: usize,
    check_interrupt: &dyn Fn() -> Result<(), MalsitesError>,
) -> Result<GenerateOutcome, MalsitesError> {
    println!("Generating {count} filters");
    debug!(
        "site list {} -> filter file {}",
        paths.input_file.display(),
        paths.output_file.display()
    );

    let contents = read_site_list(&paths.input_file)?;
    let selection = select_filters(&contents, count)?;

    check_interrupt()?;
    write_filters(&paths.output_file, &selection.contents)?;

    Ok(GenerateOutcome {
        written: selection.selected,
        available: selection.available,
        bytes: selection.contents.len(),
        sha256: sha256_hex(selection.contents.as_bytes()),
    })
}
