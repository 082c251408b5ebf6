//! Example: Dense output interpolation on a harmonic oscillator

use ivp_euler::prelude::*;
use std::f64::consts::PI;

struct SHO;

impl ODE for SHO {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        // y' = [y1, -y0]
        dydt[0] = y[1];
        dydt[1] = -y[0];
    }
}

fn main() {
    let f = SHO;
    let t0 = 0.0;
    let t_bound = 2.0 * PI; // one period
    let y0 = [1.0, 0.0];

    let options = IVPOptions::builder()
        .h(1e-3)
        .dense_output(true)
        .build();

    let sol = match solve_ivp(&f, t0, t_bound, &y0, options) {
        Ok(sol) => sol,
        Err(e) => {
            eprintln!("solve_ivp failed: {}", e);
            return;
        }
    };
    println!("Final status: {:?}", sol.status);
    println!("Steps: {} (function evaluations {})", sol.nstep, sol.nfev);

    // Use continuous solution via sol() to evaluate on a coarse grid
    if let Some((t0, t1)) = sol.sol_span() {
        let npts = 40;
        let ts: Vec<f64> = (0..=npts)
            .map(|i| t0 + (t1 - t0) * (i as f64) / (npts as f64))
            .collect();
        let ys = sol.sol_many(&ts);

        // Print a few interpolated samples and the analytic reference
        for (i, (t, y_opt)) in ts.iter().zip(ys.iter()).enumerate() {
            if i % 8 == 0 {
                if let Some(y) = y_opt {
                    println!(
                        "t = {:>7.4}, y = [{:>.6}, {:>.6}]  ref = [{:>.6}, {:>.6}]",
                        t,
                        y[0],
                        y[1],
                        t.cos(),
                        -t.sin()
                    );
                }
            }
        }
    } else {
        println!("dense output was not enabled");
    }
}
