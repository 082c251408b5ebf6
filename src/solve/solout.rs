//! Default SolOut that implements t_eval sampling and endpoint recording; wraps a user SolOut.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        solout::{ControlFlag, SolOut},
    },
};

pub(crate) struct DefaultSolOut<'a, S: SolOut> {
    t_eval: Option<&'a [Float]>,
    direction: Float,
    next_idx: usize,
    /// Matching tolerance for t_eval points, relative to the step length.
    rtol: Float,
    t: Vec<Float>,
    y: Vec<Vec<Float>>,
    user: &'a mut S,
}

impl<'a, S: SolOut> DefaultSolOut<'a, S> {
    pub(crate) fn new(t_eval: Option<&'a [Float]>, direction: Float, user: &'a mut S) -> Self {
        Self {
            t_eval,
            direction,
            next_idx: 0,
            rtol: 1e-12,
            t: Vec::new(),
            y: Vec::new(),
            user,
        }
    }

    pub(crate) fn into_data(self) -> (Vec<Float>, Vec<Vec<Float>>) {
        (self.t, self.y)
    }
}

impl<'a, S: SolOut> SolOut for DefaultSolOut<'a, S> {
    fn solout<I: Interpolate>(
        &mut self,
        told: Float,
        t: Float,
        y: &[Float],
        interpolator: &I,
    ) -> ControlFlag {
        match self.t_eval {
            // Record step endpoints
            None => {
                self.t.push(t);
                self.y.push(y.to_vec());
            }
            Some(te) => {
                let mut i = self.next_idx;
                if told == t {
                    // Initial call: only points coinciding with t, taken from y directly
                    while i < te.len() && te[i] == t {
                        self.t.push(te[i]);
                        self.y.push(y.to_vec());
                        i += 1;
                    }
                } else {
                    // Include all te[i] in (told, t] up to tolerance
                    let d = self.direction;
                    let tol = self.rtol * (t - told).abs();
                    while i < te.len() && d * (te[i] - t) <= tol {
                        if d * (te[i] - told) >= -tol {
                            let mut yi = vec![0.0; y.len()];
                            interpolator.interpolate(te[i], &mut yi);
                            self.t.push(te[i]);
                            self.y.push(yi);
                        }
                        i += 1;
                    }
                }
                self.next_idx = i;
            }
        }

        self.user.solout(told, t, y, interpolator)
    }
}
