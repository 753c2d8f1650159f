//! Byte destinations for rendered output

use crate::error::Result;
use std::io::{self, Write};

/// A destination a sink delivers rendered bytes to.
///
/// Transports carry no formatting logic and no filtering; the owning sink
/// renders first and hands finished lines here. Failures propagate unchanged
/// through the sink's `log`/`flush`.
pub trait Transport: Send {
    /// Deliver one rendered record.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flush any buffering below this transport.
    fn flush(&mut self) -> Result<()>;
}

/// Thin adapter over the process stdout stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTransport;

impl StdoutTransport {
    /// Create a stdout transport.
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for StdoutTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        // One locked write per record keeps lines from distinct sinks
        // aiming at the same stream intact.
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().lock().flush()?;
        Ok(())
    }
}

/// Thin adapter over the process stderr stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTransport;

impl StderrTransport {
    /// Create a stderr transport.
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for StderrTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stderr().lock().flush()?;
        Ok(())
    }
}
