//! # nonsepgab
//!
//! Gabor windows on non-separable lattices, rewritten as separable
//! multi-windows.
//!
//! A Gabor system sampled on a non-separable (sheared) time-frequency lattice
//! can be computed without loss as a sum of Gabor systems on one separable
//! (rectangular) lattice, each with its own window. This crate computes that
//! set of windows, the "multi-window", from the original window and the
//! lattice geometry.
//!
//! # Lattice Geometry
//!
//! - `a`: time hop of the non-separable lattice
//! - `M`: number of frequency channels, frequency step `b = L / M`
//! - `(lt1, lt2)`: lattice type; every time step shears the frequency grid by
//!   `lt1/lt2` of a frequency step
//!
//! The equivalent separable system has time hop `a · lt2`, `M` channels and
//! `lt2` windows.
//!
//! # Quick Start
//!
//! ```
//! use nonsepgab::{nonsep_win_to_multi, LatticeType};
//! use num_complex::Complex64;
//!
//! let g: Vec<Complex64> = (0..12)
//!     .map(|i| Complex64::new((-((i as f64 - 6.0) / 3.0).powi(2)).exp(), 0.0))
//!     .collect();
//!
//! // Quincunx lattice: half a frequency step of shear per time step
//! let mwin = nonsep_win_to_multi(&g, 3, 4, LatticeType::new(1, 2).unwrap()).unwrap();
//!
//! assert_eq!(mwin.n_windows(), 2);
//! assert_eq!(mwin.separable_hop(), 6);
//! ```
//!
//! # Module Organization
//!
//! - [`lattice`]: lattice types and the [`GaborParams`] configuration value
//! - [`multiwin`]: the converter and the [`MultiWindow`] result
//! - [`window`]: FIR / full-length window helpers
//! - [`host`]: validated coercion of host-language arguments
//!
//! # Feature Flags
//!
//! | Feature  | Description                      |
//! |----------|----------------------------------|
//! | `python` | Python bindings (PyO3 + numpy)   |
//! | `wasm`   | JavaScript bindings (wasm-bindgen) |
//!
//! # Logging
//!
//! Conversions emit `tracing` events: `debug` for every call, `warn` for
//! lattice types that are not reduced and for transform lengths whose
//! frequency step is not a multiple of `lt2`. Install a subscriber in the
//! application to see them.

pub mod error;
pub mod host;
pub mod lattice;
pub mod multiwin;
pub mod window;

// WASM bindings (enabled with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Python bindings (enabled with "python" feature)
#[cfg(feature = "python")]
pub mod python;

/// Error types for nonsepgab operations.
pub use error::{Error, Result};

/// Lattice description.
///
/// - `LatticeType`: validated `(lt1, lt2)` pair
/// - `GaborParams`: hop size, channel count and lattice type
pub use lattice::{GaborParams, LatticeType};

/// Multi-window conversion.
///
/// - `MultiWindow`: L × lt2 window set with its lattice geometry
/// - `nonsep_win_to_multi`: convert a full-length window
/// - `nonsep_fir_win_to_multi`: convert a FIR window for a longer transform
pub use multiwin::{nonsep_fir_win_to_multi, nonsep_win_to_multi, MultiWindow};

pub use window::{fir_to_long, long_to_fir};
