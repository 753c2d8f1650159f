//! Error types for sink dispatch

use std::io;

/// Result type for sink and transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the transport boundary.
///
/// Everything inside the dispatch core is infallible by construction:
/// pattern compilation degrades gracefully and rendering is pure
/// computation. Only byte delivery can fail, and that failure passes through
/// `log`/`flush` unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from a transport
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport failure that is not an I/O error
    #[error("transport error: {0}")]
    Transport(String),
}
