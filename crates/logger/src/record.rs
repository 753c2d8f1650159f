//! Log record type

use crate::Level;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source location of a log call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// File that issued the record
    pub file: &'static str,
    /// 1-based line number
    pub line: u32,
    /// Enclosing function name
    pub function: &'static str,
}

impl SourceLocation {
    /// Create a source location.
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// A single log event.
///
/// Built once per log call, immutable thereafter. Sinks borrow a record for
/// the duration of one dispatch call and must not retain references beyond
/// it; the borrowed payload ([`Cow`]) keeps the hot path allocation-free when
/// the caller already has the text.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Name of the logger that produced the record
    pub name: &'a str,
    /// Severity
    pub level: Level,
    /// Wall-clock time of the log call
    pub timestamp: DateTime<Utc>,
    /// Stable identity of the originating thread
    pub thread_id: u64,
    /// Call site, if known
    pub source: Option<SourceLocation>,
    /// Message text
    pub payload: Cow<'a, str>,
}

impl<'a> Record<'a> {
    /// Create a record stamped with the current time and calling thread.
    pub fn new(name: &'a str, level: Level, payload: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name,
            level,
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
            source: None,
            payload: payload.into(),
        }
    }

    /// Builder-style method for setting an explicit timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builder-style method for setting the call site
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }
}

/// Stable identity of the current thread.
///
/// Assigned lazily from a process-wide counter; ids start at 1 and are never
/// reused within a process.
pub fn current_thread_id() -> u64 {
    static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
    }
    THREAD_ID.with(|id| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_source() {
        let record = Record::new("app", Level::Info, "hello");
        assert_eq!(record.name, "app");
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.payload, "hello");
        assert!(record.source.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let location = SourceLocation::new("record.rs", 42, "builders_set_fields");
        let record = Record::new("app", Level::Debug, "hi").with_source(location);
        assert_eq!(record.source, Some(location));
    }

    #[test]
    fn thread_id_is_stable_per_thread() {
        let first = current_thread_id();
        let second = current_thread_id();
        assert_eq!(first, second);

        let other = std::thread::spawn(current_thread_id)
            .join()
            .expect("thread panicked");
        assert_ne!(first, other);
    }
}
