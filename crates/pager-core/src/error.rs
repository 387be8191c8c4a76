//! Error types for cursor pagination.

use miette::Diagnostic;

use crate::navigation::Direction;

/// Main error type for pager operations.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// No persistent client-side storage. The pager degrades to inert.
    #[error("persistent storage is not available")]
    #[diagnostic(code(pager::storage_unavailable))]
    StorageUnavailable,

    /// Stored history diverged from the page being shown.
    #[error("cursor history under {key:?} is corrupted: {reason}")]
    #[diagnostic(
        code(pager::history_corrupted),
        help("reset the listing by loading {redirect_to}")
    )]
    HistoryCorrupted {
        key: String,
        reason: &'static str,
        /// Where to send the user to start over from page 1.
        redirect_to: String,
    },

    /// A control was activated while disabled.
    #[error("{0} action invoked while disabled")]
    #[diagnostic(code(pager::disabled_action))]
    DisabledActionInvoked(Direction),

    /// Persistence layer failure
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

impl PagerError {
    /// Redirect target for errors that recover by reloading page 1.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            PagerError::HistoryCorrupted { redirect_to, .. } => Some(redirect_to),
            _ => None,
        }
    }
}

/// Errors raised by a `CursorStore` implementation.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("failed to read {key:?}: {message}")]
    #[diagnostic(code(pager::store::read))]
    Read { key: String, message: String },

    #[error("failed to write {key:?}: {message}")]
    #[diagnostic(code(pager::store::write))]
    Write { key: String, message: String },
}
