//! Error types for nonsepgab.
//!
//! Every error in this crate is a precondition failure: it is detected before
//! any output is allocated, and retrying with the same arguments yields the
//! same error. All errors implement `std::error::Error` via the `thiserror`
//! crate.

use thiserror::Error;

/// Result type alias using nonsepgab's Error type.
///
/// # Example
///
/// ```
/// use nonsepgab::{LatticeType, Result};
///
/// fn quincunx() -> Result<LatticeType> {
///     LatticeType::new(1, 2)
/// }
/// # assert!(quincunx().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a multi-window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The window (or the requested transform length) is empty, or a FIR
    /// window is longer than the transform it should be extended to.
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Hop size or channel count out of range.
    ///
    /// Returned for `a <= 0`, `M <= 0`, and for host values that cannot be
    /// coerced to a positive integer (NaN, infinities).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lattice type outside `0 <= lt1 < lt2`.
    ///
    /// Also returned when a host-side lattice vector does not have exactly two
    /// finite entries.
    #[error("Invalid lattice type: {0}")]
    InvalidLatticeType(String),
}
