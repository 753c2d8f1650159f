//! Log severity levels

use std::fmt;

/// Severity of a log record, ordered from most to least verbose.
///
/// Ordinals are stable and contiguous from zero, so `candidate >= threshold`
/// implements "at least as severe as". [`Level::Off`] is the maximum ordinal
/// and only ever acts as a filter threshold meaning "suppress everything";
/// real records never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Most detailed debugging information
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General informational messages
    Info = 2,
    /// Potentially harmful situations
    Warn = 3,
    /// Errors that still allow the application to continue
    Error = 4,
    /// Serious errors
    Critical = 5,
    /// Threshold that disables logging entirely
    Off = 6,
}

/// All levels in ordinal order.
///
/// Callers that need strict name validation (rather than the permissive
/// [`Level::from_str_lossy`]) can check membership against this table
/// themselves.
pub const ALL_LEVELS: [Level; 7] = [
    Level::Trace,
    Level::Debug,
    Level::Info,
    Level::Warn,
    Level::Error,
    Level::Critical,
    Level::Off,
];

impl Level {
    /// Full lowercase name, e.g. `"warn"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Off => "off",
        }
    }

    /// Single-letter code, e.g. `"W"`.
    pub const fn as_short_str(self) -> &'static str {
        match self {
            Level::Trace => "T",
            Level::Debug => "D",
            Level::Info => "I",
            Level::Warn => "W",
            Level::Error => "E",
            Level::Critical => "C",
            Level::Off => "O",
        }
    }

    /// Parse a level name, case-insensitively.
    ///
    /// Unrecognized input falls back to [`Level::Info`] rather than failing;
    /// pre-check against [`ALL_LEVELS`] when a typo must not be silently
    /// accepted.
    pub fn from_str_lossy(name: &str) -> Level {
        let lower = name.to_ascii_lowercase();
        ALL_LEVELS
            .into_iter()
            .find(|level| level.as_str() == lower)
            .unwrap_or(Level::Info)
    }

    /// Whether a record at `candidate` clears this threshold.
    pub const fn allows(self, candidate: Level) -> bool {
        candidate as u8 >= self as u8
    }

    pub(crate) const fn from_ordinal(ordinal: u8) -> Level {
        match ordinal {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Critical,
            _ => Level::Off,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_contiguous() {
        for (index, level) in ALL_LEVELS.into_iter().enumerate() {
            assert_eq!(level as u8, index as u8);
        }
        assert_eq!(Level::Off as u8, 6);
    }

    #[test]
    fn names_round_trip() {
        for level in ALL_LEVELS {
            assert_eq!(Level::from_str_lossy(level.as_str()), level);
        }
        assert_eq!(Level::Warn.as_str(), "warn");
        assert_eq!(Level::Warn.as_short_str(), "W");
        assert_eq!(Level::Critical.as_short_str(), "C");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Level::from_str_lossy("WARN"), Level::Warn);
        assert_eq!(Level::from_str_lossy("Critical"), Level::Critical);
        assert_eq!(Level::from_str_lossy("tRaCe"), Level::Trace);
    }

    #[test]
    fn unknown_name_falls_back_to_info() {
        assert_eq!(Level::from_str_lossy("verbose"), Level::Info);
        assert_eq!(Level::from_str_lossy(""), Level::Info);
    }

    #[test]
    fn threshold_comparison() {
        assert!(Level::Warn.allows(Level::Warn));
        assert!(Level::Warn.allows(Level::Critical));
        assert!(!Level::Warn.allows(Level::Info));
        assert!(!Level::Off.allows(Level::Critical));
        assert!(Level::Trace.allows(Level::Trace));
    }
}
