//! Test support utilities
//!
//! Transports that capture output in memory, for asserting on delivery
//! behavior without touching real streams.

use crate::error::{Error, Result};
use crate::transport::Transport;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct CaptureState {
    writes: Vec<Vec<u8>>,
    flushes: u64,
}

/// Transport that records every write in memory.
///
/// Clones share the same buffer, so a test keeps one handle while the sink
/// owns another. Each `write` call is stored as its own entry, which lets
/// tests assert that one delivered record equals one complete transport
/// call.
#[derive(Debug, Clone, Default)]
pub struct CaptureTransport {
    inner: Arc<Mutex<CaptureState>>,
}

impl CaptureTransport {
    /// Create an empty capture transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write delivered so far, one entry per transport call.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().writes.clone()
    }

    /// Number of write calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().writes.len()
    }

    /// Captured writes decoded as UTF-8, one string per call.
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .writes
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }

    /// Number of flush calls so far.
    pub fn flush_count(&self) -> u64 {
        self.inner.lock().unwrap().flushes
    }

    /// Whether any captured write contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines().iter().any(|line| line.contains(text))
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        let mut state = self.inner.lock().unwrap();
        state.writes.clear();
        state.flushes = 0;
    }
}

impl Transport for CaptureTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.lock().unwrap().writes.push(bytes.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.lock().unwrap().flushes += 1;
        Ok(())
    }
}

/// Transport that rejects every operation, for error-propagation tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn write(&mut self, _bytes: &[u8]) -> Result<()> {
        Err(Error::Transport("write rejected".into()))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::Transport("flush rejected".into()))
    }
}
