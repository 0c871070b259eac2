use thiserror::Error;

/// Separator placed between selected filters; nothing follows the last one.
pub const FILTER_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub contents: String,
    pub selected: usize,
    pub available: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TruncateError {
    #[error("n ({requested}) > number of available filters ({available})")]
    CountExceedsAvailable { requested: usize, available: usize },
}

/// Split text into records on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not open an extra empty record, so `"a\n"` and
/// `"a"` both hold one record and empty input holds none.
pub fn split_records(contents: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut rest = contents;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                let (record, tail) = rest.split_at(idx);
                records.push(record);
                rest = strip_terminator(tail);
            }
            None => {
                records.push(rest);
                break;
            }
        }
    }

    records
}

fn strip_terminator(tail: &str) -> &str {
    tail.strip_prefix("\r\n")
        .or_else(|| tail.strip_prefix('\n'))
        .or_else(|| tail.strip_prefix('\r'))
        .unwrap_or(tail)
}

/// Trim Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
pub fn trim_filter(record: &str) -> &str {
    record.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Keep the first `requested` records, trimmed, joined with `\n`.
pub fn select_filters(contents: &str, requested: usize) -> Result<FilterSelection, TruncateError> {
    let records = split_records(contents);
    let available = records.len();

    if requested > available {
        return Err(TruncateError::CountExceedsAvailable {
            requested,
            available,
        });
    }

    let filters: Vec<&str> = records
        .into_iter()
        .take(requested)
        .map(trim_filter)
        .collect();

    Ok(FilterSelection {
        contents: filters.join(FILTER_SEPARATOR),
        selected: filters.len(),
        available,
    })
}
