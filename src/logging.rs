use std::env;
use std::ffi::OsStr;
use std::io::{IsTerminal, Write};

use env_logger::WriteStyle;
use log::LevelFilter;

use crate::error::MalsitesError;

pub const ENV_MALSITES_LOG_FORMAT: &str = "MALSITES_LOG_FORMAT";

/// Install the stderr logger. Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), MalsitesError> {
    let format = LogFormat::resolve(
        env::var_os(ENV_MALSITES_LOG_FORMAT).as_deref(),
        std::io::stderr().is_terminal(),
        running_under_systemd(),
    );

    env_logger::Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .format(move |buf, record| match format {
            LogFormat::Human => writeln!(buf, "{}: {}", record.level(), record.args()),
            LogFormat::Journal => {
                writeln!(buf, "level={} msg={}", record.level(), record.args())
            }
        })
        .try_init()
        .map_err(|err| MalsitesError::LoggerInit {
            reason: err.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Human,
    Journal,
}

impl LogFormat {
    fn resolve(configured: Option<&OsStr>, stderr_is_terminal: bool, under_systemd: bool) -> Self {
        configured
            .and_then(Self::parse)
            .unwrap_or_else(|| Self::auto(stderr_is_terminal, under_systemd))
    }

    /// `None` means auto-detect: explicit `auto`, blank, or unrecognised values.
    fn parse(value: &OsStr) -> Option<Self> {
        let value = value.to_str()?.trim();
        if value.eq_ignore_ascii_case("human") {
            Some(Self::Human)
        } else if value.eq_ignore_ascii_case("journal") {
            Some(Self::Journal)
        } else {
            None
        }
    }

    fn auto(stderr_is_terminal: bool, under_systemd: bool) -> Self {
        if under_systemd || !stderr_is_terminal {
            Self::Journal
        } else {
            Self::Human
        }
    }
}

fn running_under_systemd() -> bool {
    env::var_os("INVOCATION_ID").is_some() || env::var_os("JOURNAL_STREAM").is_some()
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{LogFormat, init};
    use crate::error::MalsitesError;

    #[test]
    fn repeated_init_reports_logger_init_error() {
        let _ = init(LevelFilter::Off);

        let err = init(LevelFilter::Off).expect_err("second init must fail");
        match err {
            MalsitesError::LoggerInit { reason } => assert!(!reason.is_empty()),
            _ => panic!("expected logger init error"),
        }
    }

    #[test]
    fn auto_prefers_journal_for_pipes_and_systemd() {
        assert_eq!(LogFormat::auto(false, false), LogFormat::Journal);
        assert_eq!(LogFormat::auto(true, true), LogFormat::Journal);
        assert_eq!(LogFormat::auto(true, false), LogFormat::Human);
    }

    #[test]
    fn explicit_format_overrides_detection() {
        assert_eq!(
            LogFormat::resolve(Some("HUMAN".as_ref()), false, true),
            LogFormat::Human
        );
        assert_eq!(
            LogFormat::resolve(Some(" journal ".as_ref()), true, false),
            LogFormat::Journal
        );
    }

    #[test]
    fn auto_blank_or_unknown_values_fall_back_to_detection() {
        assert_eq!(LogFormat::resolve(None, true, false), LogFormat::Human);
        assert_eq!(
            LogFormat::resolve(Some("auto".as_ref()), true, false),
            LogFormat::Human
        );
        assert_eq!(
            LogFormat::resolve(Some("".as_ref()), false, false),
            LogFormat::Journal
        );
        assert_eq!(
            LogFormat::resolve(Some("syslog".as_ref()), true, true),
            LogFormat::Journal
        );
    }
}
