//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation with forward Euler and compare the
//! error against the exact solution as the step size is halved.
//!
//! Equations:
//! dy/dt = -y
//!
//! Initial condition: y(0) = 1.0
//!

use ivp_euler::prelude::*;

struct SimpleODE;

impl ODE for SimpleODE {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        // Example: dy/dt = -y (exponential decay)
        for i in 0..y.len() {
            dydt[i] = -y[i];
        }
    }
}

fn main() {
    let f = SimpleODE;
    let t0 = 0.0;
    let t_bound: f64 = 1.0;
    let y0 = [1.0];
    let exact = (-t_bound).exp();

    for h in [0.04, 0.02, 0.01, 0.005] {
        let options = IVPOptions::builder().h(h).build();
        match solve_ivp(&f, t0, t_bound, &y0, options) {
            Ok(sol) => {
                let y_end = sol.y.last().map_or(f64::NAN, |y| y[0]);
                println!(
                    "h = {:<6} steps = {:<4} y(1) = {:.6}  error = {:.3e}",
                    h,
                    sol.nstep,
                    y_end,
                    (y_end - exact).abs()
                );
            }
            Err(e) => eprintln!("Integration failed: {}", e),
        }
    }
}
