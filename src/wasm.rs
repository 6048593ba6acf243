//! WASM bindings for nonsepgab.
//!
//! JavaScript has no complex typed array, so windows cross the boundary as
//! separate real and imaginary `Float64Array`s. Matrices come back
//! column-major: sub-window `w` occupies `[w*L, (w+1)*L)`.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { MultiWindow } from './pkg/nonsepgab.js';
//!
//! await init();
//!
//! const re = new Float64Array([1, 2, 3, 4, 5, 6, 7, 8]);
//! const im = new Float64Array(8);
//! const mwin = new MultiWindow(re, im, 2, 4, new Float64Array([1, 3]));
//!
//! mwin.n_windows();   // 3
//! mwin.real();        // Float64Array, length 24
//! ```
//!
//! # Building for WASM
//!
//! ```bash
//! wasm-pack build --target web --features wasm
//! ```

use num_complex::Complex64;
use wasm_bindgen::prelude::*;

use crate::host::comp_nonsepwin2multi;
use crate::multiwin::MultiWindow as RustMultiWindow;

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// MultiWindow
// ============================================================================

/// Multi-window of a non-separable Gabor system.
#[wasm_bindgen]
pub struct MultiWindow {
    inner: RustMultiWindow,
}

#[wasm_bindgen]
impl MultiWindow {
    /// Convert a window for a non-separable lattice.
    ///
    /// # Arguments
    ///
    /// * `re`, `im` - Real and imaginary parts of the window (same length L)
    /// * `a` - Hop size
    /// * `m` - Number of channels (rounded half-up)
    /// * `lt` - Lattice type `[lt1, lt2]` (each rounded half-up)
    ///
    /// # Errors
    ///
    /// Throws on mismatched `re`/`im` lengths and on any invalid argument.
    #[wasm_bindgen(constructor)]
    pub fn new(re: &[f64], im: &[f64], a: i32, m: f64, lt: &[f64]) -> Result<MultiWindow, JsError> {
        if re.len() != im.len() {
            return Err(JsError::new(&format!(
                "Real and imaginary parts differ in length: {} vs {}",
                re.len(),
                im.len()
            )));
        }

        let g: Vec<Complex64> = re
            .iter()
            .zip(im.iter())
            .map(|(&r, &i)| Complex64::new(r, i))
            .collect();

        let inner = comp_nonsepwin2multi(&g, i64::from(a), m, lt)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(MultiWindow { inner })
    }

    /// Window length L.
    pub fn n_samples(&self) -> usize {
        self.inner.n_samples()
    }

    /// Number of sub-windows (lt2).
    pub fn n_windows(&self) -> usize {
        self.inner.n_windows()
    }

    /// Time hop of the separable system (a · lt2).
    pub fn separable_hop(&self) -> usize {
        self.inner.separable_hop()
    }

    /// Circular time shift of sub-window `w`.
    pub fn time_shift(&self, w: usize) -> usize {
        self.inner.time_shift(w)
    }

    /// Modulation of sub-window `w` in frequency bins.
    pub fn wavenumber(&self, w: usize) -> usize {
        self.inner.wavenumber(w)
    }

    /// Real parts as a column-major Float64Array (L · lt2 values).
    pub fn real(&self) -> Vec<f64> {
        self.column_major(|c| c.re)
    }

    /// Imaginary parts as a column-major Float64Array (L · lt2 values).
    pub fn imag(&self) -> Vec<f64> {
        self.column_major(|c| c.im)
    }
}

impl MultiWindow {
    fn column_major(&self, part: impl Fn(&Complex64) -> f64) -> Vec<f64> {
        // reversed_axes() turns the row-major walk into a column walk
        self.inner
            .windows()
            .reversed_axes()
            .iter()
            .map(part)
            .collect()
    }
}
