//! Options for solve_ivp

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug, Default)]
/// Options for solve_ivp similar to SciPy
pub struct IVPOptions {
    /// Fixed step size. Default: `(t_bound - t0) / 100`.
    pub h: Option<Float>,
    /// Points where the solution is requested. If provided, only these points
    /// are stored, sampled from each step's dense output. Otherwise every step
    /// endpoint is stored, starting with `t0`.
    pub t_eval: Option<Vec<Float>>,
    /// Keep the dense output of every step so the solution can be evaluated
    /// anywhere in the integrated span. Default: false.
    #[builder(default)]
    pub dense_output: bool,
    /// Whether the right-hand side is vectorized. Passed through to the method.
    #[builder(default)]
    pub vectorized: bool,
    /// Configuration keys the method does not recognize. Accepted with a warning.
    #[builder(default)]
    pub extraneous: Vec<String>,
}

impl IVPOptions {
    /// Check `t_eval` against the integration span.
    pub(crate) fn validate(&self, t0: Float, t_bound: Float) -> Result<(), crate::Error> {
        let Some(te) = self.t_eval.as_deref() else {
            return Ok(());
        };
        let Some((&first, rest)) = te.split_first() else {
            return Err(crate::Error::InvalidTEval(
                "t_eval must be non-empty when provided".into(),
            ));
        };

        let dir = (t_bound - t0).signum();
        let mut prev = first;
        for &t in rest {
            if !(dir >= 0.0 && t >= prev || dir <= 0.0 && t <= prev) {
                return Err(crate::Error::InvalidTEval(
                    "t_eval must be monotonic in the integration direction".into(),
                ));
            }
            prev = t;
        }

        let (lo, hi) = (t0.min(t_bound), t0.max(t_bound));
        if te.iter().any(|&t| t < lo || t > hi) {
            return Err(crate::Error::InvalidTEval(
                "t_eval points must lie within [t0, t_bound]".into(),
            ));
        }
        Ok(())
    }
}
