//! Pattern compilation and rendering
//!
//! A pattern string such as `"[%Y-%m-%d %H:%M:%S] [%l] %v"` compiles into an
//! ordered sequence of [`Directive`]s that the [`PatternFormatter`] executes
//! per record. The expensive calendar conversion is cached per whole second,
//! so bursts of records within the same second reuse one breakdown.

use crate::formatter::Formatter;
use crate::record::Record;
use chrono::{Datelike, Local, Timelike};
use std::fmt::Write;
use std::mem;

/// Pattern used by sinks that are not given one explicitly.
pub const DEFAULT_PATTERN: &str = "[%Y-%m-%d %H:%M:%S] [%l] %v";

/// One compiled rendering step.
///
/// `Literal` carries plain text runs, escaped percents, and unrecognized
/// `%<tag>` sequences; every other variant substitutes one record or
/// calendar field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Verbatim text
    Literal(String),
    /// `%Y`, four-digit year
    Year,
    /// `%m`, two-digit month (01-12)
    Month,
    /// `%d`, two-digit day of month
    Day,
    /// `%H`, two-digit hour (00-23)
    Hour,
    /// `%M`, two-digit minute
    Minute,
    /// `%S`, two-digit second
    Second,
    /// `%l`, single-letter level code
    LevelShort,
    /// `%L`, full lowercase level name
    LevelFull,
    /// `%n`, logger name
    LoggerName,
    /// `%v`, message text
    Payload,
    /// `%t`, originating thread id as a decimal integer
    ThreadId,
}

/// Compile `pattern` into an ordered directive sequence.
///
/// Compilation never fails and is idempotent. `%%` collapses to a literal
/// percent, an unrecognized `%<tag>` is kept verbatim, and a lone `%` at the
/// end of the pattern is dropped silently.
pub fn compile_pattern(pattern: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        if !literal.is_empty() {
            directives.push(Directive::Literal(mem::take(&mut literal)));
        }
        let Some(tag) = chars.next() else {
            // trailing lone '%'
            break;
        };
        match tag {
            'Y' => directives.push(Directive::Year),
            'm' => directives.push(Directive::Month),
            'd' => directives.push(Directive::Day),
            'H' => directives.push(Directive::Hour),
            'M' => directives.push(Directive::Minute),
            'S' => directives.push(Directive::Second),
            'l' => directives.push(Directive::LevelShort),
            'L' => directives.push(Directive::LevelFull),
            'n' => directives.push(Directive::LoggerName),
            'v' => directives.push(Directive::Payload),
            't' => directives.push(Directive::ThreadId),
            '%' => literal.push('%'),
            unknown => {
                literal.push('%');
                literal.push(unknown);
            }
        }
    }

    if !literal.is_empty() {
        directives.push(Directive::Literal(literal));
    }
    directives
}

/// Broken-down local calendar fields, valid for one whole-second bucket.
#[derive(Debug, Clone, Copy)]
struct TimeCache {
    bucket: i64,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// A [`Formatter`] driven by a compiled pattern string.
///
/// Owns its compiled directives and a one-entry time cache keyed on the
/// record's whole-second bucket. The cache is private per formatter; sinks
/// never share a `PatternFormatter` instance.
#[derive(Debug)]
pub struct PatternFormatter {
    pattern: String,
    directives: Vec<Directive>,
    cache: Option<TimeCache>,
    conversions: u64,
}

impl PatternFormatter {
    /// Compile `pattern` into a ready-to-use formatter.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let directives = compile_pattern(&pattern);
        Self {
            pattern,
            directives,
            cache: None,
            conversions: 0,
        }
    }

    /// Replace the pattern, recompiling wholesale and dropping the cache.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.directives = compile_pattern(&self.pattern);
        self.cache = None;
    }

    /// The source pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of calendar conversions performed so far.
    ///
    /// Increments once per cache miss; lets tests observe the per-second
    /// amortization.
    pub fn conversion_count(&self) -> u64 {
        self.conversions
    }

    fn cached_time(&mut self, record: &Record) -> TimeCache {
        // Keyed on bucket equality, not monotonic progression: an earlier
        // timestamp arriving after a later one still forces a recompute.
        let bucket = record.timestamp.timestamp();
        match self.cache {
            Some(cache) if cache.bucket == bucket => cache,
            _ => {
                let local = record.timestamp.with_timezone(&Local);
                let cache = TimeCache {
                    bucket,
                    year: local.year(),
                    month: local.month(),
                    day: local.day(),
                    hour: local.hour(),
                    minute: local.minute(),
                    second: local.second(),
                };
                self.conversions += 1;
                self.cache = Some(cache);
                cache
            }
        }
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl Clone for PatternFormatter {
    /// Recompiles from the pattern string, so the clone's cache starts
    /// empty.
    fn clone(&self) -> Self {
        Self::new(self.pattern.clone())
    }
}

impl Formatter for PatternFormatter {
    fn format(&mut self, record: &Record, dest: &mut String) {
        let time = self.cached_time(record);
        for directive in &self.directives {
            match directive {
                Directive::Literal(text) => dest.push_str(text),
                Directive::Year => {
                    let _ = write!(dest, "{:04}", time.year);
                }
                Directive::Month => {
                    let _ = write!(dest, "{:02}", time.month);
                }
                Directive::Day => {
                    let _ = write!(dest, "{:02}", time.day);
                }
                Directive::Hour => {
                    let _ = write!(dest, "{:02}", time.hour);
                }
                Directive::Minute => {
                    let _ = write!(dest, "{:02}", time.minute);
                }
                Directive::Second => {
                    let _ = write!(dest, "{:02}", time.second);
                }
                Directive::LevelShort => dest.push_str(record.level.as_short_str()),
                Directive::LevelFull => dest.push_str(record.level.as_str()),
                Directive::LoggerName => dest.push_str(record.name),
                Directive::Payload => dest.push_str(&record.payload),
                Directive::ThreadId => {
                    let _ = write!(dest, "{}", record.thread_id);
                }
            }
        }
        dest.push('\n');
    }

    fn clone_box(&self) -> Box<dyn Formatter> {
        Box::new(self.clone())
    }
}
