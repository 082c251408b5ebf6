//! User defined callback hook executed after each step.

use crate::{Float, core::interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed once before the first step and after every step.
///
/// The arguments are:
/// - `told`: the left end of the last step (equal to `t` on the initial call),
/// - `t`: the time reached by the step,
/// - `y`: the state at `t`,
/// - `interpolator`: dense output valid on `[told, t]`.
///
/// On the initial call the interpolator covers a zero-length interval and
/// must not be evaluated.
///
/// # Example
///
/// ```ignore
/// struct Printer { tout: f64, dt: f64 }
/// impl SolOut for Printer {
///     fn solout<I: Interpolate>(&mut self, told: f64, t: f64, y: &[f64], interp: &I) -> ControlFlag {
///         let mut yi = y.to_vec();
///         while self.tout <= t {
///             if self.tout >= told && told < t {
///                 interp.interpolate(self.tout, &mut yi);
///                 println!("t = {}, y = {:?}", self.tout, yi);
///             }
///             self.tout += self.dt;
///         }
///         ControlFlag::Continue
///     }
/// }
/// ```
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        told: Float,
        t: Float,
        y: &[Float],
        interpolator: &I,
    ) -> ControlFlag;
}

/// A `SolOut` that does nothing; used when no callback is supplied.
pub struct DummySolOut;

impl SolOut for DummySolOut {
    fn solout<I: Interpolate>(
        &mut self,
        _told: Float,
        _t: Float,
        _y: &[Float],
        _interpolator: &I,
    ) -> ControlFlag {
        ControlFlag::Continue
    }
}
