//! Multi-window - Non-separable Gabor windows as separable multi-windows.
//!
//! A Gabor system on a non-separable lattice of type `(lt1, lt2)` with time
//! hop `a` and frequency step `b = L/M` uses the sampling points
//!
//! ```text
//! λ(n, m) = (n·a, m·b + (n·lt1 mod lt2)·b/lt2)
//! ```
//!
//! # Coset Decomposition
//!
//! Group the time indices by `w = n mod lt2`. For a fixed `w`, the points
//! `λ(w + k·lt2, m)` form the separable lattice with time hop `a·lt2` and
//! frequency step `b`, translated by
//!
//! - `w·a` samples in time, and
//! - `k_w = ((w·lt1) mod lt2)·b/lt2` frequency bins.
//!
//! Translating the lattice is the same as translating the window, so the
//! non-separable system equals the union of `lt2` separable systems whose
//! windows are
//!
//! ```text
//! g_w[l] = exp(2πi·l·k_w/L) · g[(l - w·a) mod L]       w = 0..lt2
//! ```
//!
//! These are the columns of the [`MultiWindow`]. Column 0 is always `g`.
//!
//! # Lattice Compatibility
//!
//! `k_w` is only an integer when `lt2` divides `b`. For other transform
//! lengths the wavenumber is truncated toward zero (the frequency shift is
//! rounded down to a whole bin) and a warning is logged, so that every column
//! stays `L`-periodic.
//!
//! # Separable Lattices
//!
//! With `lt1 = 0` there is no shear: each column is a plain copy of `g`,
//! whatever `lt2` is.

use ndarray::{Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::lattice::{check_hop_and_channels, LatticeType};
use crate::window::fir_to_long;

/// Window set of a separable multi-window Gabor system (L × lt2).
///
/// Produced by [`nonsep_win_to_multi`]; it remembers the lattice geometry
/// that generated it.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiWindow {
    /// Sub-windows, one per column.
    ///
    /// windows[[l, w]] is sample `l` of sub-window `w`.
    windows: Array2<Complex64>,

    /// Time hop of the non-separable lattice.
    a: usize,

    /// Number of frequency channels.
    m: usize,

    lattice: LatticeType,
}

impl MultiWindow {
    /// All sub-windows as an L × lt2 matrix.
    #[inline]
    pub fn windows(&self) -> ArrayView2<'_, Complex64> {
        self.windows.view()
    }

    /// Take ownership of the L × lt2 matrix.
    pub fn into_windows(self) -> Array2<Complex64> {
        self.windows
    }

    /// Sub-window `w` (column `w`).
    ///
    /// # Panics
    ///
    /// Panics if `w >= n_windows()`.
    #[inline]
    pub fn window(&self, w: usize) -> ArrayView1<'_, Complex64> {
        self.windows.column(w)
    }

    /// Window length `L`.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.windows.nrows()
    }

    /// Number of sub-windows (`lt2`).
    #[inline]
    pub fn n_windows(&self) -> usize {
        self.windows.ncols()
    }

    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn lattice(&self) -> LatticeType {
        self.lattice
    }

    /// Time hop of the separable lattice each sub-window lives on (`a · lt2`).
    pub fn separable_hop(&self) -> usize {
        self.a * self.lattice.lt2()
    }

    /// Frequency step `b = L / M` in bins.
    pub fn frequency_step(&self) -> usize {
        self.n_samples() / self.m
    }

    /// Circular time shift (in samples) applied to sub-window `w`.
    pub fn time_shift(&self, w: usize) -> usize {
        if self.lattice.is_separable() {
            0
        } else {
            coset_time_shift(w, self.a, self.n_samples())
        }
    }

    /// Modulation (in frequency bins) applied to sub-window `w`.
    pub fn wavenumber(&self, w: usize) -> usize {
        coset_wavenumber(w, self.lattice, self.frequency_step())
    }

    /// Sub-windows as separate vectors, in column order.
    pub fn to_vecs(&self) -> Vec<Vec<Complex64>> {
        self.windows
            .columns()
            .into_iter()
            .map(|col| col.to_vec())
            .collect()
    }
}

/// Frequency translation `((w·lt1) mod lt2)·b/lt2` of coset `w`.
fn coset_wavenumber(w: usize, lattice: LatticeType, b: usize) -> usize {
    let lt2 = lattice.lt2();
    (w % lt2) * lattice.lt1() % lt2 * b / lt2
}

/// Time translation `(w·a) mod L` of coset `w`.
fn coset_time_shift(w: usize, a: usize, l: usize) -> usize {
    (w % l) * (a % l) % l
}

/// Table of the `L`-th roots of unity, `exp(2πi·k/L)`.
fn unit_roots(l: usize) -> Vec<Complex64> {
    let scale = 2.0 * std::f64::consts::PI / l as f64;
    (0..l)
        .map(|k| Complex64::from_polar(1.0, scale * k as f64))
        .collect()
}

/// Convert a window for a non-separable lattice into its separable multi-window.
///
/// # Arguments
///
/// * `g` - Window, one period of length `L`
/// * `a` - Time hop of the non-separable lattice
/// * `m` - Number of frequency channels
/// * `lattice` - Lattice type `(lt1, lt2)`
///
/// # Returns
///
/// An `L × lt2` [`MultiWindow`]. Column `w` is `g` shifted by `w·a` samples
/// and modulated by `k_w` bins, see the module documentation.
///
/// # Errors
///
/// - `Error::InvalidLength` if `g` is empty
/// - `Error::InvalidParameter` if `a == 0` or `m == 0`
///
/// # Example
///
/// ```
/// use nonsepgab::{nonsep_win_to_multi, LatticeType};
/// use num_complex::Complex64;
///
/// let g: Vec<Complex64> = (1..=8).map(|v| Complex64::new(v as f64, 0.0)).collect();
/// let mwin = nonsep_win_to_multi(&g, 2, 4, LatticeType::new(1, 3).unwrap()).unwrap();
/// assert_eq!(mwin.windows().dim(), (8, 3));
/// ```
pub fn nonsep_win_to_multi(
    g: &[Complex64],
    a: usize,
    m: usize,
    lattice: LatticeType,
) -> Result<MultiWindow> {
    let l = g.len();
    if l == 0 {
        return Err(Error::InvalidLength(
            "window must contain at least one sample".to_string(),
        ));
    }
    check_hop_and_channels(a, m)?;

    let lt2 = lattice.lt2();
    let b = l / m;

    tracing::debug!(
        l,
        a,
        m,
        lattice = %lattice,
        "converting non-separable window to multi-window"
    );
    if !lattice.is_reduced() {
        tracing::warn!(
            lattice = %lattice,
            "lattice type is not in reduced form, expected {}",
            lattice.reduced()
        );
    }
    if !lattice.is_separable() && b % lt2 != 0 {
        tracing::warn!(
            l,
            m,
            lt2,
            "frequency step {} is not a multiple of lt2, wavenumbers are truncated",
            b
        );
    }

    let mut windows = Array2::<Complex64>::zeros((l, lt2));

    if lattice.is_separable() {
        let g_view = ArrayView1::from(g);
        for mut col in windows.columns_mut() {
            col.assign(&g_view);
        }
    } else {
        let roots = unit_roots(l);

        for (w, mut col) in windows.columns_mut().into_iter().enumerate() {
            let shift = coset_time_shift(w, a, l);
            let k = coset_wavenumber(w, lattice, b);

            // phase index l·k mod L, advanced incrementally
            let mut phase = 0;
            for (n, out) in col.iter_mut().enumerate() {
                let src = g[(n + l - shift) % l];
                *out = if k == 0 { src } else { roots[phase] * src };
                phase = (phase + k) % l;
            }
        }
    }

    Ok(MultiWindow {
        windows,
        a,
        m,
        lattice,
    })
}

/// Like [`nonsep_win_to_multi`], for a FIR window shorter than the transform.
///
/// `g` is first extended to length `l` with [`fir_to_long`].
///
/// # Errors
///
/// - `Error::InvalidLength` if `g` is empty, `l == 0` or `g.len() > l`
/// - `Error::InvalidParameter` if `a == 0` or `m == 0`
pub fn nonsep_fir_win_to_multi(
    g: &[Complex64],
    l: usize,
    a: usize,
    m: usize,
    lattice: LatticeType,
) -> Result<MultiWindow> {
    let long = fir_to_long(g, l)?;
    nonsep_win_to_multi(&long, a, m, lattice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(l: usize) -> Vec<Complex64> {
        (0..l)
            .map(|i| Complex64::new(i as f64 + 1.0, -(i as f64) * 0.5))
            .collect()
    }

    #[test]
    fn wavenumbers_follow_coset_order() {
        // L = 12, M = 2 -> b = 6; lt = (2, 3) -> k = 0, 4, 2
        let lt = LatticeType::new(2, 3).unwrap();
        assert_eq!(coset_wavenumber(0, lt, 6), 0);
        assert_eq!(coset_wavenumber(1, lt, 6), 4);
        assert_eq!(coset_wavenumber(2, lt, 6), 2);
    }

    #[test]
    fn truncated_wavenumber() {
        // b = 2, lt2 = 3: 1·2/3 -> 0, 2·2/3 -> 1
        let lt = LatticeType::new(1, 3).unwrap();
        assert_eq!(coset_wavenumber(1, lt, 2), 0);
        assert_eq!(coset_wavenumber(2, lt, 2), 1);
    }

    #[test]
    fn time_shift_wraps() {
        assert_eq!(coset_time_shift(3, 5, 8), 7);
        assert_eq!(coset_time_shift(2, 20, 8), 0);
    }

    #[test]
    fn unit_roots_are_on_circle() {
        let roots = unit_roots(6);
        assert_eq!(roots[0], Complex64::new(1.0, 0.0));
        assert_relative_eq!(roots[3].re, -1.0, epsilon = 1e-15);
        assert_relative_eq!(roots[3].im, 0.0, epsilon = 1e-15);
        for r in &roots {
            assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn first_column_is_input() {
        let g = ramp(12);
        let mwin = nonsep_win_to_multi(&g, 3, 4, LatticeType::new(1, 2).unwrap()).unwrap();
        assert_eq!(mwin.window(0).to_vec(), g);
    }

    #[test]
    fn geometry_accessors() {
        let g = ramp(24);
        let mwin = nonsep_win_to_multi(&g, 2, 4, LatticeType::new(1, 3).unwrap()).unwrap();
        assert_eq!(mwin.n_samples(), 24);
        assert_eq!(mwin.n_windows(), 3);
        assert_eq!(mwin.separable_hop(), 6);
        assert_eq!(mwin.frequency_step(), 6);
        assert_eq!(mwin.time_shift(2), 4);
        assert_eq!(mwin.wavenumber(1), 2);
        assert_eq!(mwin.wavenumber(2), 4);
    }

    #[test]
    fn separable_has_no_shift() {
        let g = ramp(8);
        let mwin = nonsep_win_to_multi(&g, 2, 4, LatticeType::new(0, 3).unwrap()).unwrap();
        for w in 0..3 {
            assert_eq!(mwin.time_shift(w), 0);
            assert_eq!(mwin.wavenumber(w), 0);
        }
    }

    #[test]
    fn fir_variant_matches_long_window() {
        let g = ramp(5);
        let lt = LatticeType::new(1, 2).unwrap();
        let from_fir = nonsep_fir_win_to_multi(&g, 16, 2, 4, lt).unwrap();
        let long = fir_to_long(&g, 16).unwrap();
        let from_long = nonsep_win_to_multi(&long, 2, 4, lt).unwrap();
        assert_eq!(from_fir, from_long);
    }
}
