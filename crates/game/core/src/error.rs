//! Common error infrastructure for game-core.
//!
//! Generation and classification cannot fail, so the only domain error in this
//! crate is [`crate::MoveError`], defined next to the movement rules it
//! reports on. Shared classification lives here so that callers (the runtime,
//! a UI) can decide how loudly to report a failure.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Recoverable**: an expected outcome of play, e.g. walking into a wall
/// - **Validation**: the caller asked for something the state does not allow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// Implementors derive `thiserror::Error` for Display/Error and add a
/// severity plus a stable code for logs and tests.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveError;
    use crate::board::Position;

    #[test]
    fn move_errors_cover_both_severities() {
        let blocked = MoveError::Blocked {
            destination: Position::new(0, 0),
        };
        assert_eq!(blocked.severity(), ErrorSeverity::Recoverable);
        assert_eq!(blocked.severity().as_str(), "recoverable");

        let unplaced = MoveError::NotPlaced;
        assert_eq!(unplaced.severity(), ErrorSeverity::Validation);
        assert_eq!(unplaced.severity().as_str(), "validation");
        assert!(!unplaced.severity().is_recoverable());
    }
}
