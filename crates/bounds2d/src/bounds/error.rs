//! Bounding computation errors

use thiserror::Error;

/// Errors produced while constructing bounding volumes.
///
/// The transform and union operations are total numeric functions and have
/// no error path; only construction from external data can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// No points were supplied to derive a bound from
    #[error("cannot compute bounds from an empty point set")]
    EmptyPointSet,
}
