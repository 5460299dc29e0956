use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::models::ClassificationMode;

#[cfg(test)]
mod tests;

pub const USAGE: &str = "\
Usage: stay-ledger [charges].csv [payments].csv [log_level:optional] [classification:optional] > [ledger].csv
Available log levels: error, warn, info, debug, trace (default: error)
Available classifications: row, booking (default: row)";

/// What a reconciliation run was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub charges_path: String,
    pub payments_path: String,
    pub log_level: LevelFilter,
    pub mode: ClassificationMode
}

impl CliOptions {
    /// Reads positional arguments, program name excluded.
    ///
    /// Returns `None` when either input path is missing. Unknown optional
    /// values fall back to their defaults with a note on stderr.
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut args = args.into_iter();
        let charges_path = args.next()?.as_ref().to_string();
        let payments_path = args.next()?.as_ref().to_string();

        let log_level = args.next()
            .map_or(LevelFilter::ERROR, |level| log_level_or_default(level.as_ref()));
        let mode = args.next()
            .map_or_else(ClassificationMode::default, |mode| classification_or_default(mode.as_ref()));

        Some(Self { charges_path, payments_path, log_level, mode })
    }
}

fn log_level_or_default(level: &str) -> LevelFilter {
    // "off" parses too, but a run with no error output is never what was meant
    match LevelFilter::from_str(level) {
        Ok(parsed) if parsed != LevelFilter::OFF => parsed,
        _ => {
            eprintln!("Unknown log level '{level}', using 'error'");
            LevelFilter::ERROR
        }
    }
}

fn classification_or_default(mode: &str) -> ClassificationMode {
    if mode.eq_ignore_ascii_case("row") {
        ClassificationMode::RowCumulative
    } else if mode.eq_ignore_ascii_case("booking") {
        ClassificationMode::BookingSum
    } else {
        eprintln!("Unknown classification '{mode}', using 'row'");
        ClassificationMode::RowCumulative
    }
}
