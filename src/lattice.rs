//! Lattice - Time-frequency sampling lattices in reduced integer form.
//!
//! A Gabor system samples the time-frequency plane on a lattice. With time
//! step `a` and frequency step `b = L / M`, a lattice of type `(lt1, lt2)`
//! contains the points
//!
//! ```text
//! (n·a, (m + n·lt1/lt2)·b)      n = 0..L/a, m = 0..M
//! ```
//!
//! so every time step shears the frequency grid by the fraction `lt1/lt2` of
//! one frequency step. `lt1 = 0` is the ordinary rectangular (separable)
//! lattice; `(1, 2)` is the quincunx lattice.
//!
//! # Reduced Form
//!
//! The pair is only unique when `gcd(lt1, lt2) = 1`: `(2, 4)` shears by the
//! same amount as `(1, 2)`. Constructors accept any `0 <= lt1 < lt2` and leave
//! reduction to the caller, see [`LatticeType::reduced`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::multiwin::{nonsep_win_to_multi, MultiWindow};

/// Greatest common divisor (Euclid). `gcd(0, n) == n`.
pub fn gcd(mut x: usize, mut y: usize) -> usize {
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Lattice type `(lt1, lt2)` with `0 <= lt1 < lt2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct LatticeType {
    lt1: usize,
    lt2: usize,
}

impl LatticeType {
    /// Create a lattice type, validating `lt2 >= 1` and `lt1 < lt2`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLatticeType` when `lt2 == 0` or `lt1 >= lt2`.
    pub fn new(lt1: usize, lt2: usize) -> Result<Self> {
        if lt2 == 0 {
            return Err(Error::InvalidLatticeType(
                "lt2 must be at least 1".to_string(),
            ));
        }
        if lt1 >= lt2 {
            return Err(Error::InvalidLatticeType(format!(
                "lt1 must be smaller than lt2, got [{}, {}]",
                lt1, lt2
            )));
        }
        Ok(Self { lt1, lt2 })
    }

    /// The rectangular lattice `(0, 1)`.
    pub const fn separable() -> Self {
        Self { lt1: 0, lt2: 1 }
    }

    /// Shear numerator.
    #[inline]
    pub fn lt1(&self) -> usize {
        self.lt1
    }

    /// Shear denominator; also the number of sub-windows of the multi-window.
    #[inline]
    pub fn lt2(&self) -> usize {
        self.lt2
    }

    /// True when the lattice has no shear (`lt1 == 0`).
    #[inline]
    pub fn is_separable(&self) -> bool {
        self.lt1 == 0
    }

    /// True when `gcd(lt1, lt2) == 1`, or for the separable lattice `(0, 1)`.
    pub fn is_reduced(&self) -> bool {
        gcd(self.lt1, self.lt2) == 1
    }

    /// Divide both entries by their gcd. `(0, n)` reduces to `(0, 1)`.
    pub fn reduced(&self) -> Self {
        let d = gcd(self.lt1, self.lt2);
        Self {
            lt1: self.lt1 / d,
            lt2: self.lt2 / d,
        }
    }

    /// Shear of the frequency axis per time step, in units of one frequency step.
    pub fn shear(&self) -> f64 {
        self.lt1 as f64 / self.lt2 as f64
    }
}

impl Default for LatticeType {
    fn default() -> Self {
        Self::separable()
    }
}

impl TryFrom<[usize; 2]> for LatticeType {
    type Error = Error;

    fn try_from(lt: [usize; 2]) -> Result<Self> {
        Self::new(lt[0], lt[1])
    }
}

impl From<LatticeType> for [usize; 2] {
    fn from(lt: LatticeType) -> Self {
        [lt.lt1, lt.lt2]
    }
}

impl std::fmt::Display for LatticeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lt1, self.lt2)
    }
}

/// Geometry of a (possibly non-separable) Gabor system.
///
/// Holds the time hop `a`, the channel count `M` and the lattice type. It is
/// the configuration value of this crate: it can be built in code or
/// deserialized, and is validated either way.
///
/// ```
/// use nonsepgab::{GaborParams, LatticeType};
///
/// let params = GaborParams::new(4, 8, LatticeType::new(1, 2).unwrap()).unwrap();
/// assert_eq!(params.separable_hop(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGaborParams")]
pub struct GaborParams {
    a: usize,
    m: usize,
    lattice: LatticeType,
}

#[derive(Deserialize)]
struct RawGaborParams {
    a: usize,
    m: usize,
    #[serde(default)]
    lattice: LatticeType,
}

impl TryFrom<RawGaborParams> for GaborParams {
    type Error = Error;

    fn try_from(raw: RawGaborParams) -> Result<Self> {
        Self::new(raw.a, raw.m, raw.lattice)
    }
}

impl GaborParams {
    /// Create a parameter set.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` when `a == 0` or `m == 0`.
    pub fn new(a: usize, m: usize, lattice: LatticeType) -> Result<Self> {
        check_hop_and_channels(a, m)?;
        Ok(Self { a, m, lattice })
    }

    /// Time hop of the non-separable lattice.
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Number of frequency channels.
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn lattice(&self) -> LatticeType {
        self.lattice
    }

    /// Time hop of the equivalent separable system (`a · lt2`).
    pub fn separable_hop(&self) -> usize {
        self.a * self.lattice.lt2
    }

    /// Frequency step `L / M` for a transform of length `l` (integer division).
    pub fn frequency_step(&self, l: usize) -> usize {
        l / self.m
    }

    /// Convert `g` into the multi-window for this lattice.
    pub fn to_multiwindow(&self, g: &[Complex64]) -> Result<MultiWindow> {
        nonsep_win_to_multi(g, self.a, self.m, self.lattice)
    }
}

pub(crate) fn check_hop_and_channels(a: usize, m: usize) -> Result<()> {
    if a == 0 {
        return Err(Error::InvalidParameter(
            "hop size a must be positive".to_string(),
        ));
    }
    if m == 0 {
        return Err(Error::InvalidParameter(
            "number of channels M must be positive".to_string(),
        ));
    }
    Ok(())
}
