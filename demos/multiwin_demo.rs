//! Convert a Gaussian window for a few lattice types and print the geometry.

use nonsepgab::{nonsep_win_to_multi, LatticeType};
use num_complex::Complex64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let l = 48;
    let a = 4;
    let m = 6;

    let g: Vec<Complex64> = (0..l)
        .map(|i| {
            // periodic Gaussian centered at 0
            let t = (i as f64).min((l - i) as f64) / (l as f64 / 8.0);
            Complex64::new((-std::f64::consts::PI * t * t).exp(), 0.0)
        })
        .collect();

    for &(lt1, lt2) in &[(0, 1), (1, 2), (1, 3), (2, 3)] {
        let lattice = LatticeType::new(lt1, lt2)?;
        let mwin = nonsep_win_to_multi(&g, a, m, lattice)?;

        println!("\n{}", "=".repeat(50));
        println!(
            "lt = {}  ->  {} windows, separable hop {}, b = {}",
            lattice,
            mwin.n_windows(),
            mwin.separable_hop(),
            mwin.frequency_step()
        );
        println!("{}", "=".repeat(50));

        for w in 0..mwin.n_windows() {
            let energy: f64 = mwin.window(w).iter().map(|c| c.norm_sqr()).sum();
            println!(
                "  window {}: shift {:>2}, wavenumber {:>2}, energy {:.6}",
                w,
                mwin.time_shift(w),
                mwin.wavenumber(w),
                energy
            );
        }
    }

    Ok(())
}
