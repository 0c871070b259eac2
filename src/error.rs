use std::path::PathBuf;

use thiserror::Error;

use crate::adapters::path::PathResolutionError;
use crate::core::truncate::TruncateError;

#[derive(Debug, Error)]
pub enum MalsitesError {
    #[error("failed to initialize logger: {reason}")]
    LoggerInit { reason: String },

    #[error("failed to install SIGINT handler: {reason}")]
    SignalHandlerInstall { reason: String },

    #[error("operation interrupted by SIGINT")]
    Interrupted,

    #[error("path resolution failed: {source}")]
    PathResolution {
        #[from]
        source: PathResolutionError,
    },

    #[error("failed to read site list {path}: {reason}")]
    InputRead { path: PathBuf, reason: String },

    #[error("failed to write filter file {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("invalid filter count: {source}")]
    Truncate {
        #[from]
        source: TruncateError,
    },
}

/// Coarse grouping of failures as reported to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Configuration,
    Io,
    Validation,
    Runtime,
}

impl ErrorClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Io => "io",
            Self::Validation => "validation",
            Self::Runtime => "runtime",
        }
    }
}

impl MalsitesError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::PathResolution { .. } => ErrorClass::Configuration,
            Self::InputRead { .. } | Self::OutputWrite { .. } => ErrorClass::Io,
            Self::Truncate { .. } => ErrorClass::Validation,
            Self::LoggerInit { .. } | Self::SignalHandlerInstall { .. } | Self::Interrupted => {
                ErrorClass::Runtime
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => 130,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ErrorClass, MalsitesError};
    use crate::adapters::path::PathResolutionError;
    use crate::core::truncate::TruncateError;

    #[test]
    fn failures_map_onto_operator_classes() {
        let cases = vec![
            (
                MalsitesError::from(PathResolutionError::BaseDirUnset),
                ErrorClass::Configuration,
            ),
            (
                MalsitesError::InputRead {
                    path: PathBuf::from("/tmp/in.txt"),
                    reason: "No such file or directory".to_string(),
                },
                ErrorClass::Io,
            ),
            (
                MalsitesError::OutputWrite {
                    path: PathBuf::from("/tmp/out.txt"),
                    reason: "Permission denied".to_string(),
                },
                ErrorClass::Io,
            ),
            (
                MalsitesError::from(TruncateError::CountExceedsAvailable {
                    requested: 2,
                    available: 1,
                }),
                ErrorClass::Validation,
            ),
            (MalsitesError::Interrupted, ErrorClass::Runtime),
        ];

        for (err, expected) in cases {
            assert_eq!(err.class(), expected, "unexpected class for {err}");
        }
    }

    #[test]
    fn class_labels_prefix_operator_messages() {
        assert_eq!(ErrorClass::Configuration.label(), "configuration");
        assert_eq!(ErrorClass::Io.label(), "io");
        assert_eq!(ErrorClass::Validation.label(), "validation");
        assert_eq!(ErrorClass::Runtime.label(), "runtime");
    }

    #[test]
    fn interrupt_exits_with_130_and_everything_else_with_1() {
        assert_eq!(MalsitesError::Interrupted.exit_code(), 130);
        assert_eq!(
            MalsitesError::from(PathResolutionError::BaseDirUnset).exit_code(),
            1
        );
    }

    #[test]
    fn validation_message_names_both_counts() {
        let err = MalsitesError::from(TruncateError::CountExceedsAvailable {
            requested: 2,
            available: 1,
        });
        assert_eq!(
            err.to_string(),
            "invalid filter count: n (2) > number of available filters (1)"
        );
    }
}
