//! Formatter contract

use crate::Record;

/// Capability contract for turning a [`Record`] into output text.
///
/// Each sink owns exactly one formatter instance, so concurrent rendering by
/// different sinks never contends on shared cache state. Any concrete
/// renderer type can satisfy this contract; [`crate::PatternFormatter`] is
/// the pattern-driven one.
pub trait Formatter: Send {
    /// Append the rendered record, including its trailing newline, to `dest`.
    ///
    /// Rendering is pure computation over in-memory data and cannot fail.
    /// `&mut self` lets implementations maintain internal caches across
    /// calls.
    fn format(&mut self, record: &Record, dest: &mut String);

    /// Independent duplicate of this formatter.
    ///
    /// The duplicate renders identically but starts with an empty,
    /// unpopulated cache; it never inherits cached state from its origin.
    fn clone_box(&self) -> Box<dyn Formatter>;
}
