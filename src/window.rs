//! Window - Moving windows between FIR support and full transform length.
//!
//! Windows here are one period of an `L`-periodic signal, centered at index 0.
//! A FIR window of length `Lg` therefore occupies the first `ceil(Lg/2)`
//! samples of the period and wraps its remaining `floor(Lg/2)` samples around
//! to the end:
//!
//! ```text
//! FIR  (Lg = 5):  [g0 g1 g2 g3 g4]
//! long (L = 9):   [g0 g1 g2  0  0  0  0 g3 g4]
//! ```
//!
//! For odd `Lg` the extra sample belongs to the first half.

use num_complex::Complex64;

use crate::error::{Error, Result};

/// Zero-extend a FIR window to length `l`, keeping it centered at index 0.
///
/// # Errors
///
/// `Error::InvalidLength` when `g` is empty, `l == 0`, or `g.len() > l`.
pub fn fir_to_long(g: &[Complex64], l: usize) -> Result<Vec<Complex64>> {
    let lg = g.len();
    check_lengths(lg, l)?;

    let head = lg - lg / 2;
    let tail = lg / 2;

    let mut out = vec![Complex64::new(0.0, 0.0); l];
    out[..head].copy_from_slice(&g[..head]);
    out[l - tail..].copy_from_slice(&g[head..]);
    Ok(out)
}

/// Cut a full-length window down to its centered FIR support of length `lg`.
///
/// The inverse of [`fir_to_long`]; samples outside the support are dropped.
///
/// # Errors
///
/// `Error::InvalidLength` when `g` is empty, `lg == 0`, or `lg > g.len()`.
pub fn long_to_fir(g: &[Complex64], lg: usize) -> Result<Vec<Complex64>> {
    let l = g.len();
    check_lengths(lg, l)?;

    let head = lg - lg / 2;
    let tail = lg / 2;

    let mut out = Vec::with_capacity(lg);
    out.extend_from_slice(&g[..head]);
    out.extend_from_slice(&g[l - tail..]);
    Ok(out)
}

fn check_lengths(lg: usize, l: usize) -> Result<()> {
    if lg == 0 || l == 0 {
        return Err(Error::InvalidLength(
            "window and transform length must be positive".to_string(),
        ));
    }
    if lg > l {
        return Err(Error::InvalidLength(format!(
            "window length {} exceeds transform length {}",
            lg, l
        )));
    }
    Ok(())
}
