//! Logger error types.

use thiserror::Error;

use crate::logger::level::Level;

/// Raised instead of writing output when an Error-severity call hits a logger
/// with escalation enabled. Displays as the formatted line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}")]
pub struct Escalation {
    /// Name of the logger that escalated.
    pub logger: String,
    /// Severity of the escalated call.
    pub level: Level,
    /// The fully formatted line that would have been written.
    pub line: String,
}

/// Result of a logging call that may escalate.
pub type LogResult = Result<(), Escalation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalation_display_is_formatted_line() {
        let err = Escalation {
            logger: "net".into(),
            level: Level::Error,
            line: "[net] Error: boom".into(),
        };
        assert_eq!(err.to_string(), "[net] Error: boom");
    }
}
