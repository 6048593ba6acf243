//! Tests for the host-facing entry point `comp_nonsepwin2multi`.

use nonsepgab::host::{coerce_lattice_type, comp_nonsepwin2multi};
use nonsepgab::{nonsep_win_to_multi, Error, LatticeType};
use num_complex::Complex64;

fn window(l: usize) -> Vec<Complex64> {
    (0..l)
        .map(|i| Complex64::new((i as f64 * 0.7).sin(), (i as f64 * 0.3).cos()))
        .collect()
}

#[test]
fn separable_scenario_returns_window_unchanged() {
    let g: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0]
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    let mwin = comp_nonsepwin2multi(&g, 2, 2.0, &[0.0, 1.0]).unwrap();
    let windows = mwin.into_windows();
    assert_eq!(windows.dim(), (4, 1));
    assert_eq!(windows.column(0).to_vec(), g);
}

#[test]
fn general_scenario_shape() {
    let mwin = comp_nonsepwin2multi(&window(8), 2, 4.0, &[1.0, 3.0]).unwrap();
    assert_eq!(mwin.windows().dim(), (8, 3));
}

#[test]
fn lattice_entries_are_rounded_half_up() {
    let g = window(16);
    let rounded = comp_nonsepwin2multi(&g, 2, 4.0, &[2.4, 3.6]).unwrap();
    assert_eq!(rounded.lattice(), LatticeType::new(2, 4).unwrap());
    assert_eq!(rounded.n_windows(), 4);

    let exact = comp_nonsepwin2multi(&g, 2, 4.0, &[2.0, 4.0]).unwrap();
    assert_eq!(rounded, exact);

    // 0.5 rounds up, -0.4 rounds to 0
    assert_eq!(
        coerce_lattice_type(&[0.5, 1.5]).unwrap(),
        LatticeType::new(1, 2).unwrap()
    );
    assert!(coerce_lattice_type(&[-0.4, 1.0]).unwrap().is_separable());
}

#[test]
fn channel_count_is_coerced() {
    let g = window(12);
    let lt = LatticeType::new(1, 2).unwrap();
    let from_float = comp_nonsepwin2multi(&g, 3, 3.7, &[1.0, 2.0]).unwrap();
    let from_int = nonsep_win_to_multi(&g, 3, 4, lt).unwrap();
    assert_eq!(from_float, from_int);
    assert_eq!(from_float.m(), 4);
}

#[test]
fn matches_typed_entry_point() {
    let g = window(30);
    let host = comp_nonsepwin2multi(&g, 3, 5.0, &[2.0, 5.0]).unwrap();
    let typed = nonsep_win_to_multi(&g, 3, 5, LatticeType::new(2, 5).unwrap()).unwrap();
    assert_eq!(host, typed);
}

#[test]
fn each_precondition_has_its_error() {
    let g = window(8);

    assert!(matches!(
        comp_nonsepwin2multi(&[], 2, 4.0, &[1.0, 3.0]),
        Err(Error::InvalidLength(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 0, 4.0, &[1.0, 3.0]),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, -1, 4.0, &[1.0, 3.0]),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 2, 0.0, &[1.0, 3.0]),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 2, f64::INFINITY, &[1.0, 3.0]),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 2, 4.0, &[0.0, 0.0]),
        Err(Error::InvalidLatticeType(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 2, 4.0, &[3.0, 3.0]),
        Err(Error::InvalidLatticeType(_))
    ));
    assert!(matches!(
        comp_nonsepwin2multi(&g, 2, 4.0, &[f64::NAN, 3.0]),
        Err(Error::InvalidLatticeType(_))
    ));
}

#[test]
fn errors_carry_a_message() {
    let err = comp_nonsepwin2multi(&window(4), 2, 4.0, &[5.0, 3.0]).unwrap_err();
    assert!(err.to_string().starts_with("Invalid lattice type"));
}
