//! Pattern-driven structured logging core
//!
//! Callers emit [`Record`]s carrying a level, logger name, timestamp, thread
//! identity, and payload text. A sink filters them by [`Level`], renders them
//! through its owned [`Formatter`] (usually a [`PatternFormatter`] compiled
//! from a `%`-directive pattern string), and hands the finished bytes to a
//! [`Transport`].
//!
//! Sinks come in two concurrency profiles sharing one dispatch
//! implementation: [`MultiThread`] (a real mutex, safe to share across
//! threads) and [`SingleThread`] (no locking cost, statically confined to
//! one thread).
//!
//! ```
//! use quill_logger::{Level, Record, Sink, StdoutSink, StdoutTransport};
//!
//! let sink = StdoutSink::new(StdoutTransport::new());
//! sink.set_level(Level::Info);
//! sink.set_pattern("[%Y-%m-%d %H:%M:%S] [%L] %v");
//! sink.log(&Record::new("app", Level::Warn, "cache nearly full"))?;
//! sink.flush()?;
//! # Ok::<(), quill_logger::Error>(())
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod formatter;
mod level;
mod pattern;
mod record;
mod sink;
pub mod test_support;
mod transport;

pub use error::{Error, Result};
pub use formatter::Formatter;
pub use level::{ALL_LEVELS, Level};
pub use pattern::{DEFAULT_PATTERN, Directive, PatternFormatter, compile_pattern};
pub use record::{Record, SourceLocation, current_thread_id};
pub use sink::{
    BaseSink, LockPolicy, MultiThread, SingleThread, Sink, StderrSink, StderrSinkSt, StdoutSink,
    StdoutSinkSt,
};
pub use transport::{StderrTransport, StdoutTransport, Transport};
