//! Error taxonomy for cursor construction and traversal.
//!
//! All errors are local and synchronous: a failure terminates the current
//! operation for the caller to handle. There is no retry policy and no
//! partial-failure recovery, since there is no I/O and no partial batch
//! semantics in this engine.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Result type alias for operations that can produce an engine error.
pub type TraverseResult<T> = Result<T, EngineError>;

/// Error categories raised by cursors, views, and eager operations.
///
/// Uses strum derives for automatic `Display`, `FromStr`, and `Into<&'static str>`
/// implementations. The string representation matches the variant name exactly
/// (e.g., `ExhaustedSequence` -> "ExhaustedSequence").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Bad construction parameters: zero slice step, zero batch size,
    /// a lazy window with stop before start.
    InvalidArgument,
    /// A required collaborator (predicate, transform, source) is absent.
    ///
    /// Collaborator presence is enforced by the type system in this crate,
    /// so the engine itself never raises this kind; it is part of the
    /// taxonomy so error kinds round-trip through their string forms.
    NullArgument,
    /// A pull was requested with no more elements available.
    ExhaustedSequence,
    /// `remove_last` called with no eligible prior pull, or twice in a row
    /// without an intervening pull.
    PreconditionViolation,
    /// `remove_last` called on an adapter that structurally cannot support it.
    UnsupportedOperation,
}

/// An engine error: a kind plus a human-readable message.
///
/// Constructed through the named constructors below rather than literal
/// struct expressions, so call sites read as the failure they report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl EngineError {
    /// Creates an error with an explicit kind and message.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The error raised by `pull()` on an exhausted cursor.
    #[must_use]
    pub fn exhausted() -> Self {
        Self::new(ErrorKind::ExhaustedSequence, "no more elements")
    }

    /// A construction-parameter error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// The error for `remove_last` on an adapter without removal support.
    #[must_use]
    pub fn remove_unsupported(adapter: &'static str) -> Self {
        Self::new(
            ErrorKind::UnsupportedOperation,
            format!("{adapter} does not support remove_last"),
        )
    }

    /// The error for `remove_last` with no eligible prior pull.
    #[must_use]
    pub fn remove_precondition(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::PreconditionViolation, message)
    }

    /// Returns the error's kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this error reports an exhausted sequence.
    ///
    /// Callers draining a cursor without a preceding `has_more` check use
    /// this to distinguish normal exhaustion from real failures.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.kind == ErrorKind::ExhaustedSequence
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EngineError {}
