//! Python bindings for nonsepgab using PyO3.
//!
//! # Usage from Python
//!
//! ```python
//! import numpy as np
//! import nonsepgab_rust
//!
//! g = np.exp(-np.pi * ((np.arange(24) - 12) / 6.0) ** 2).astype(np.complex128)
//!
//! # Plain matrix, same calling convention as comp_nonsepwin2multi(g, a, M, lt)
//! mwin = nonsepgab_rust.comp_nonsepwin2multi(g, 2, 4, [1, 3])   # (24, 3) complex128
//!
//! # Or a MultiWindow object that also knows its lattice geometry
//! mw = nonsepgab_rust.nonsepwin2multi(g, a=2, M=4, lt=[1, 3])
//! mw.separable_hop     # 6
//! mw.wavenumber(1)     # 2
//! ```
//!
//! # Building
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python
//! ```

use ndarray::Array2;
use num_complex::Complex64;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, ToPyArray};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;
use crate::host::comp_nonsepwin2multi as host_comp_nonsepwin2multi;
use crate::multiwin::MultiWindow as RustMultiWindow;

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn convert(g: PyReadonlyArray1<'_, Complex64>, a: i64, m: f64, lt: Vec<f64>) -> PyResult<RustMultiWindow> {
    // as_array() may be strided; copy into a contiguous buffer
    let g: Vec<Complex64> = g.as_array().to_vec();
    host_comp_nonsepwin2multi(&g, a, m, &lt).map_err(to_py_err)
}

// ============================================================================
// MultiWindow
// ============================================================================

/// Multi-window of a non-separable Gabor system.
///
/// Column ``j`` of ``values()`` is the ``j``-th window of the equivalent
/// separable system with time hop ``separable_hop`` and ``M`` channels.
#[pyclass(name = "MultiWindow")]
pub struct PyMultiWindow {
    inner: RustMultiWindow,
}

#[pymethods]
impl PyMultiWindow {
    /// Window length L.
    #[getter]
    fn n_samples(&self) -> usize {
        self.inner.n_samples()
    }

    /// Number of sub-windows (lt2).
    #[getter]
    fn n_windows(&self) -> usize {
        self.inner.n_windows()
    }

    #[getter]
    fn a(&self) -> usize {
        self.inner.a()
    }

    #[getter(M)]
    fn m(&self) -> usize {
        self.inner.m()
    }

    /// Lattice type as a tuple (lt1, lt2).
    #[getter]
    fn lt(&self) -> (usize, usize) {
        let lattice = self.inner.lattice();
        (lattice.lt1(), lattice.lt2())
    }

    /// Time hop of the separable system (a * lt2).
    #[getter]
    fn separable_hop(&self) -> usize {
        self.inner.separable_hop()
    }

    /// All sub-windows as an (L, lt2) complex128 array.
    fn values<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<Complex64>> {
        self.inner.windows().to_pyarray(py)
    }

    /// Sub-window ``w`` as a 1D complex128 array.
    fn window<'py>(&self, py: Python<'py>, w: usize) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
        self.check_index(w)?;
        Ok(self.inner.window(w).to_pyarray(py))
    }

    /// Circular time shift of sub-window ``w`` in samples.
    fn time_shift(&self, w: usize) -> PyResult<usize> {
        self.check_index(w)?;
        Ok(self.inner.time_shift(w))
    }

    /// Modulation of sub-window ``w`` in frequency bins.
    fn wavenumber(&self, w: usize) -> PyResult<usize> {
        self.check_index(w)?;
        Ok(self.inner.wavenumber(w))
    }

    fn __len__(&self) -> usize {
        self.inner.n_windows()
    }

    fn __repr__(&self) -> String {
        format!(
            "MultiWindow({} samples × {} windows, a={}, M={}, lt={})",
            self.inner.n_samples(),
            self.inner.n_windows(),
            self.inner.a(),
            self.inner.m(),
            self.inner.lattice()
        )
    }
}

impl PyMultiWindow {
    fn check_index(&self, w: usize) -> PyResult<()> {
        if w >= self.inner.n_windows() {
            return Err(PyIndexError::new_err(format!(
                "window index {} out of range for {} windows",
                w,
                self.inner.n_windows()
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Convert a window for a non-separable lattice into a multi-window matrix.
///
/// Parameters
/// ----------
/// g : numpy.ndarray
///     Complex window of length L
/// a : int
///     Hop size
/// M : float
///     Number of channels (rounded half-up)
/// lt : sequence of float
///     Lattice type [lt1, lt2] (each rounded half-up)
///
/// Returns
/// -------
/// numpy.ndarray
///     complex128 array of shape (L, lt2)
#[pyfunction]
#[pyo3(name = "comp_nonsepwin2multi", signature = (g, a, M, lt))]
#[allow(non_snake_case)]
fn py_comp_nonsepwin2multi<'py>(
    py: Python<'py>,
    g: PyReadonlyArray1<'py, Complex64>,
    a: i64,
    M: f64,
    lt: Vec<f64>,
) -> PyResult<Bound<'py, PyArray2<Complex64>>> {
    let windows: Array2<Complex64> = convert(g, a, M, lt)?.into_windows();
    Ok(windows.into_pyarray(py))
}

/// Like ``comp_nonsepwin2multi`` but returns a ``MultiWindow`` object.
#[pyfunction]
#[pyo3(name = "nonsepwin2multi", signature = (g, a, M, lt))]
#[allow(non_snake_case)]
fn py_nonsepwin2multi(
    g: PyReadonlyArray1<'_, Complex64>,
    a: i64,
    M: f64,
    lt: Vec<f64>,
) -> PyResult<PyMultiWindow> {
    Ok(PyMultiWindow {
        inner: convert(g, a, M, lt)?,
    })
}

// ============================================================================
// Module definition
// ============================================================================

/// nonsepgab_rust - Multi-windows for non-separable Gabor lattices.
#[pymodule]
fn nonsepgab_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMultiWindow>()?;
    m.add_function(wrap_pyfunction!(py_comp_nonsepwin2multi, m)?)?;
    m.add_function(wrap_pyfunction!(py_nonsepwin2multi, m)?)?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
