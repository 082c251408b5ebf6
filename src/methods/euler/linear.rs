//! Linear dense output between the endpoints of one step.

use crate::{
    Float,
    core::{interpolate::Interpolate, stepper::StepResult},
};

/// Linear interpolant over a single completed step.
///
/// Evaluates `y_old + alpha * (y_new - y_old)` with
/// `alpha = (t - t_old) / (t_new - t_old)`. Queries outside `[t_old, t_new]`
/// extrapolate with the same formula. A zero-length step (`t_old == t_new`)
/// divides by zero and yields NaN (or infinities) rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    t_old: Float,
    t_new: Float,
    y_old: Vec<Float>,
    y_new: Vec<Float>,
}

impl LinearInterpolant {
    pub fn new(t_old: Float, t_new: Float, y_old: Vec<Float>, y_new: Vec<Float>) -> Self {
        Self {
            t_old,
            t_new,
            y_old,
            y_new,
        }
    }

    /// Interpolated state at `t`.
    pub fn evaluate(&self, t: Float) -> Vec<Float> {
        let mut yi = vec![0.0; self.y_old.len()];
        self.interpolate(t, &mut yi);
        yi
    }

    /// Interpolated states at each of `ts`.
    pub fn evaluate_many(&self, ts: &[Float]) -> Vec<Vec<Float>> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    pub fn t_min(&self) -> Float {
        self.t_old.min(self.t_new)
    }

    pub fn t_max(&self) -> Float {
        self.t_old.max(self.t_new)
    }
}

impl From<&StepResult> for LinearInterpolant {
    fn from(step: &StepResult) -> Self {
        Self::new(
            step.t_old,
            step.t_new,
            step.y_old.clone(),
            step.y_new.clone(),
        )
    }
}

impl Interpolate for LinearInterpolant {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        let alpha = (xi - self.t_old) / (self.t_new - self.t_old);
        for i in 0..self.y_old.len() {
            yi[i] = self.y_old[i] + alpha * (self.y_new[i] - self.y_old[i]);
        }
    }
}
