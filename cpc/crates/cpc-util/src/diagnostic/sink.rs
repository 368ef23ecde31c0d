//! The error sink capability.
//!
//! The scanner never prints and never sets global flags. It is handed an
//! [`ErrorSink`] and calls [`ErrorSink::report`] once per malformed span; what
//! happens to the report is up to whoever supplied the sink.

/// Receiver for `(line, message)` reports.
///
/// Implementations must return normally: the caller keeps scanning after
/// every report.
///
/// Any `FnMut(u32, &str)` closure is a sink, which keeps tests short:
///
/// ```
/// use cpc_util::ErrorSink;
///
/// let mut seen = Vec::new();
/// let mut sink = |line: u32, message: &str| seen.push((line, message.to_string()));
/// sink.report(2, "Unfinished string");
/// drop(sink);
///
/// assert_eq!(seen, vec![(2, "Unfinished string".to_string())]);
/// ```
pub trait ErrorSink {
    /// Record a problem found on `line` (1-based).
    fn report(&mut self, line: u32, message: &str);
}

impl<F> ErrorSink for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}
