//! Sink dispatch: severity filtering, owned formatters, and lock profiles

use crate::error::Result;
use crate::formatter::Formatter;
use crate::level::Level;
use crate::pattern::PatternFormatter;
use crate::record::Record;
use crate::transport::{StderrTransport, StdoutTransport, Transport};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU8, Ordering};

/// Mutual-exclusion capability a sink is parameterized over.
///
/// The dispatch logic is written once; the policy only decides what the
/// critical section costs. See [`MultiThread`] and [`SingleThread`].
pub trait LockPolicy {
    /// Cell holding the sink's guarded state.
    type Cell<T>;

    /// Wrap `value` in the policy's cell.
    fn new_cell<T>(value: T) -> Self::Cell<T>;

    /// Run `f` with exclusive access to the cell's contents.
    fn with<T, R>(cell: &Self::Cell<T>, f: impl FnOnce(&mut T) -> R) -> R;
}

/// Lock-bearing profile for sinks shared across threads.
pub struct MultiThread;

impl LockPolicy for MultiThread {
    type Cell<T> = parking_lot::Mutex<T>;

    fn new_cell<T>(value: T) -> Self::Cell<T> {
        parking_lot::Mutex::new(value)
    }

    fn with<T, R>(cell: &Self::Cell<T>, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut cell.lock())
    }
}

/// No-op-lock profile for single-threaded use.
///
/// `RefCell` is `!Sync`, so sharing such a sink across threads is rejected
/// at compile time instead of guarded at run time.
pub struct SingleThread;

impl LockPolicy for SingleThread {
    type Cell<T> = RefCell<T>;

    fn new_cell<T>(value: T) -> Self::Cell<T> {
        RefCell::new(value)
    }

    fn with<T, R>(cell: &Self::Cell<T>, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut cell.borrow_mut())
    }
}

/// The dispatch contract every sink honors.
///
/// Within one sink, operations are totally ordered by lock acquisition; two
/// sinks never share a lock or a formatter, so cross-sink calls never
/// contend. No operation panics for ordinary inputs; the transport is the
/// only failure surface.
pub trait Sink {
    /// Render and deliver `record` if it clears the severity threshold.
    ///
    /// Records below the threshold return `Ok(())` without touching the
    /// transport or the lock.
    fn log(&self, record: &Record) -> Result<()>;

    /// Forward a flush request to the transport.
    fn flush(&self) -> Result<()>;

    /// Replace the severity threshold.
    fn set_level(&self, level: Level);

    /// Current severity threshold.
    fn get_level(&self) -> Level;

    /// Whether a record at `level` would be delivered.
    fn should_log(&self, level: Level) -> bool;

    /// Swap the owned formatter; the swap is visible to the very next `log`
    /// and cannot race with an in-flight render.
    fn set_formatter(&self, formatter: Box<dyn Formatter>);
}

struct SinkState<T> {
    formatter: Box<dyn Formatter>,
    transport: T,
    buffer: String,
}

/// Generic sink over a transport and a lock policy.
///
/// Owns the threshold, its own formatter instance (never shared with another
/// sink), and the transport. Every public operation runs inside the policy's
/// critical section except the threshold reads, which are atomic.
pub struct BaseSink<T: Transport, L: LockPolicy = MultiThread> {
    level: AtomicU8,
    state: L::Cell<SinkState<T>>,
}

impl<T: Transport, L: LockPolicy> BaseSink<T, L> {
    /// Sink with the default pattern and a `Trace` threshold.
    pub fn new(transport: T) -> Self {
        Self::with_formatter(transport, Box::new(PatternFormatter::default()))
    }

    /// Sink rendering with the given pattern.
    pub fn with_pattern(transport: T, pattern: &str) -> Self {
        Self::with_formatter(transport, Box::new(PatternFormatter::new(pattern)))
    }

    /// Sink with an explicit formatter.
    pub fn with_formatter(transport: T, formatter: Box<dyn Formatter>) -> Self {
        Self {
            level: AtomicU8::new(Level::Trace as u8),
            state: L::new_cell(SinkState {
                formatter,
                transport,
                buffer: String::new(),
            }),
        }
    }

    /// Swap the owned formatter for one compiled from `pattern`.
    pub fn set_pattern(&self, pattern: &str) {
        self.set_formatter(Box::new(PatternFormatter::new(pattern)));
    }
}

impl<T: Transport + Default, L: LockPolicy> Default for BaseSink<T, L> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Transport, L: LockPolicy> Sink for BaseSink<T, L> {
    fn log(&self, record: &Record) -> Result<()> {
        if !self.should_log(record.level) {
            return Ok(());
        }
        L::with(&self.state, |state| {
            state.buffer.clear();
            state.formatter.format(record, &mut state.buffer);
            state.transport.write(state.buffer.as_bytes())
        })
    }

    fn flush(&self) -> Result<()> {
        L::with(&self.state, |state| state.transport.flush())
    }

    fn set_level(&self, level: Level) {
        // Stored inside the critical section so threshold changes are
        // ordered with in-flight renders.
        L::with(&self.state, |_| {
            self.level.store(level as u8, Ordering::Release);
        });
    }

    fn get_level(&self) -> Level {
        Level::from_ordinal(self.level.load(Ordering::Acquire))
    }

    fn should_log(&self, level: Level) -> bool {
        Level::from_ordinal(self.level.load(Ordering::Relaxed)).allows(level)
    }

    fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        L::with(&self.state, |state| state.formatter = formatter);
    }
}

/// Thread-safe stdout sink.
pub type StdoutSink = BaseSink<StdoutTransport, MultiThread>;
/// Thread-safe stderr sink.
pub type StderrSink = BaseSink<StderrTransport, MultiThread>;
/// Single-threaded stdout sink (no locking cost).
pub type StdoutSinkSt = BaseSink<StdoutTransport, SingleThread>;
/// Single-threaded stderr sink (no locking cost).
pub type StderrSinkSt = BaseSink<StderrTransport, SingleThread>;
