//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(t, y). The stepper calls `ode` with the current time `t`
/// and state `y` and expects you to fill `dydt` with the derivative values.
/// The state is borrowed immutably, so the right-hand side cannot modify the
/// stepper it is called from.
///
/// # Example
///
/// ```ignore
/// struct Decay { k: f64 }
/// impl ODE for Decay {
///     fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
///         dydt[0] = -self.k * y[0];
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]);
}
