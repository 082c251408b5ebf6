#![allow(dead_code)]

use ivp_euler::prelude::*;

/// dy/dt = y
pub struct Growth;

impl ODE for Growth {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        dydt.copy_from_slice(y);
    }
}

/// dy/dt = -y
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        for i in 0..y.len() {
            dydt[i] = -y[i];
        }
    }
}

/// Simple harmonic oscillator: y0' = y1, y1' = -y0
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = y[1];
        dydx[1] = -y[0];
    }
}

pub fn accepted(outcome: StepOutcome) -> StepResult {
    match outcome {
        StepOutcome::Accepted(step) => step,
        StepOutcome::Rejected(msg) => panic!("step rejected: {msg}"),
    }
}

pub fn euler<'a, F: ODE>(f: &'a F, t0: f64, y0: &[f64], t_bound: f64, h: Option<f64>) -> ForwardEuler<'a, F> {
    let options = EulerOptions::builder().maybe_h(h).build();
    ForwardEuler::new(f, t0, y0, t_bound, options).unwrap()
}
