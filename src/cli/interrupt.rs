use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::MalsitesError;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static HANDLER: OnceLock<Result<(), String>> = OnceLock::new();

/// Record SIGINT instead of dying mid-write; checked before the output file is touched.
pub fn install_handler() -> Result<(), MalsitesError> {
    HANDLER
        .get_or_init(|| {
            ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
                .map_err(|err| err.to_string())
        })
        .clone()
        .map_err(|reason| MalsitesError::SignalHandlerInstall { reason })
}

pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn ensure_not_interrupted() -> Result<(), MalsitesError> {
    if was_interrupted() {
        Err(MalsitesError::Interrupted)
    } else {
        Ok(())
    }
}
