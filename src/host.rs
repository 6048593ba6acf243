//! Host boundary - Coercion of scripting-language values.
//!
//! Host environments hand over loosely typed numbers: the channel count may be
//! a float, and the lattice type arrives as a real-valued two-element vector.
//! This module turns those values into validated integers before anything is
//! computed.
//!
//! # Rounding
//!
//! Lattice type entries and the channel count are rounded half-up,
//! `floor(x + 0.5)`, so `[2.4, 3.6]` becomes `[2, 4]` and `-0.5` becomes `0`.
//! NaN and infinities are rejected instead of being cast.
//!
//! # Check Order
//!
//! [`comp_nonsepwin2multi`] checks the window length, then `a`, then `M`, then
//! the lattice type, and reports the first failure.

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::lattice::LatticeType;
use crate::multiwin::{nonsep_win_to_multi, MultiWindow};

/// Round half-up: `floor(x + 0.5)`.
///
/// Returns `None` for non-finite input and for results outside the `i64`
/// range.
pub fn round_half_up(x: f64) -> Option<i64> {
    if !x.is_finite() {
        return None;
    }
    let r = (x + 0.5).floor();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if r < i64::MIN as f64 || r >= i64::MAX as f64 {
        return None;
    }
    Some(r as i64)
}

/// Coerce a host lattice vector `[lt1, lt2]` into a [`LatticeType`].
///
/// # Errors
///
/// `Error::InvalidLatticeType` if `lt` does not have exactly two entries, an
/// entry is not finite, or the rounded pair violates `0 <= lt1 < lt2`.
pub fn coerce_lattice_type(lt: &[f64]) -> Result<LatticeType> {
    let [lt1, lt2] = lt else {
        return Err(Error::InvalidLatticeType(format!(
            "expected two entries [lt1, lt2], got {}",
            lt.len()
        )));
    };

    let lt1 = round_half_up(*lt1)
        .ok_or_else(|| Error::InvalidLatticeType(format!("lt1 is not a finite number: {}", lt1)))?;
    let lt2 = round_half_up(*lt2)
        .ok_or_else(|| Error::InvalidLatticeType(format!("lt2 is not a finite number: {}", lt2)))?;

    if lt2 <= 0 {
        return Err(Error::InvalidLatticeType(format!(
            "lt2 must be at least 1, got {}",
            lt2
        )));
    }
    if lt1 < 0 {
        return Err(Error::InvalidLatticeType(format!(
            "lt1 must not be negative, got {}",
            lt1
        )));
    }

    let lt1 = usize::try_from(lt1)
        .map_err(|_| Error::InvalidLatticeType(format!("lt1 out of range: {}", lt1)))?;
    let lt2 = usize::try_from(lt2)
        .map_err(|_| Error::InvalidLatticeType(format!("lt2 out of range: {}", lt2)))?;
    LatticeType::new(lt1, lt2)
}

/// Coerce a host channel count to a positive integer.
///
/// # Errors
///
/// `Error::InvalidParameter` if `m` is not finite or rounds to `<= 0`.
pub fn coerce_channels(m: f64) -> Result<usize> {
    match round_half_up(m) {
        Some(v) if v > 0 => usize::try_from(v)
            .map_err(|_| Error::InvalidParameter(format!("number of channels out of range: {}", m))),
        Some(_) => Err(Error::InvalidParameter(format!(
            "number of channels M must be positive, got {}",
            m
        ))),
        None => Err(Error::InvalidParameter(format!(
            "number of channels M is not a finite number: {}",
            m
        ))),
    }
}

/// Coerce a host hop size to a positive integer.
///
/// # Errors
///
/// `Error::InvalidParameter` if `a <= 0`.
pub fn coerce_hop(a: i64) -> Result<usize> {
    if a <= 0 {
        return Err(Error::InvalidParameter(format!(
            "hop size a must be positive, got {}",
            a
        )));
    }
    usize::try_from(a).map_err(|_| Error::InvalidParameter(format!("hop size out of range: {}", a)))
}

/// Boundary entry point: `c = comp_nonsepwin2multi(g, a, M, lt)`.
///
/// # Arguments
///
/// * `g` - Complex window of length `L`
/// * `a` - Hop size, must be positive
/// * `m` - Channel count, rounded half-up, must be positive
/// * `lt` - Lattice type `[lt1, lt2]`, each entry rounded half-up
///
/// # Returns
///
/// The `L × lt2` multi-window.
///
/// # Example
///
/// ```
/// use nonsepgab::host::comp_nonsepwin2multi;
/// use num_complex::Complex64;
///
/// let g: Vec<Complex64> = (1..=8).map(|v| Complex64::new(v as f64, 0.0)).collect();
/// let mwin = comp_nonsepwin2multi(&g, 2, 4.0, &[2.4, 3.6]).unwrap();
/// assert_eq!(mwin.n_windows(), 4);
/// ```
pub fn comp_nonsepwin2multi(g: &[Complex64], a: i64, m: f64, lt: &[f64]) -> Result<MultiWindow> {
    if g.is_empty() {
        return Err(Error::InvalidLength(
            "window must contain at least one sample".to_string(),
        ));
    }
    let a = coerce_hop(a)?;
    let m = coerce_channels(m)?;
    let lattice = coerce_lattice_type(lt)?;

    nonsep_win_to_multi(g, a, m, lattice)
}
