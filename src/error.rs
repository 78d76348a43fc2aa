//! Errors reported by [`crate::Index`].
//!
//! The engine recognizes exactly two kinds of failure: a call made in the
//! wrong lifecycle phase, and a resource exhaustion (an arena that outgrew
//! its chosen [`crate::state_id::StateId`] width, or a callback that asked
//! the scan to stop). Both surface synchronously through the `Result`
//! returned by the offending call; nothing is logged or swallowed.

use thiserror::Error;

/// Top-level error type for every fallible `Index` operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller invoked an operation that the index's current lifecycle
    /// phase does not permit.
    #[error("usage error: {0}")]
    Usage(#[from] UsageError),

    /// The engine ran out of some resource, or a caller-supplied callback
    /// asked the operation to stop.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// A call made in a lifecycle phase that does not permit it. No state is
/// mutated before this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    /// [`crate::Index::insert`] was called after [`crate::Index::finalize`].
    #[error("insert() called on an index that has already been finalized")]
    InsertAfterFinalize,

    /// [`crate::Index::finalize`] was called on an index that was already
    /// finalized.
    #[error("finalize() called on an index that has already been finalized")]
    DoubleFinalize,

    /// A query method was called before [`crate::Index::finalize`].
    #[error("query issued against an index that has not been finalized")]
    QueryBeforeFinalize,
}

/// An exhausted resource, or a callback that aborted a query.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// The arena grew past what the chosen `StateId` width can address.
    /// The index is safe to drop but must not be used further.
    #[error("state arena exhausted the chosen state id width")]
    ArenaExhausted,

    /// A query callback returned `ControlFlow::Break`, aborting the scan.
    #[error("query callback aborted the scan")]
    CallbackAborted,
}
