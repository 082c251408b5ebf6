//! Forward Euler fixed-step stepper.

use crate::{
    Float,
    core::{
        ode::ODE,
        stepper::{StepOutcome, StepResult, Stepper},
    },
    error::{ConfigurationWarning, Error, warn_extraneous},
    methods::settings::EulerOptions,
};

use super::LinearInterpolant;

/// Number of steps the default step size divides the span into.
const DEFAULT_STEPS: Float = 100.0;

/// Forward Euler stepper: `y_{n+1} = y_n + h * f(t_n, y_n)` with a fixed `h`.
///
/// Integration always runs in the positive direction. The last step is
/// shortened so that `t` lands exactly on `t_bound`, reusing the derivative
/// evaluated at the start of the step.
pub struct ForwardEuler<'a, F: ODE> {
    f: &'a F,
    t: Float,
    y: Vec<Float>,
    h: Float,
    t_bound: Float,
    vectorized: bool,
    dydt: Vec<Float>,
    nfev: usize,
    warnings: Vec<ConfigurationWarning>,
}

impl<'a, F: ODE> ForwardEuler<'a, F> {
    pub fn new(
        f: &'a F,
        t0: Float,
        y0: &[Float],
        t_bound: Float,
        options: EulerOptions,
    ) -> Result<Self, Error> {
        let warnings = warn_extraneous(&options.extraneous)
            .into_iter()
            .collect();

        if options.support_complex {
            return Err(Error::ComplexUnsupported);
        }
        if !t0.is_finite() || !t_bound.is_finite() {
            return Err(Error::NonFiniteTime { t0, t_bound });
        }

        let h = match options.h {
            Some(h) if !h.is_finite() || h <= 0.0 => return Err(Error::InvalidStepSize(h)),
            Some(h) => h,
            None => (t_bound - t0) / DEFAULT_STEPS,
        };

        log::debug!(
            "forward Euler: t0 = {t0}, t_bound = {t_bound}, h = {h}, n = {}",
            y0.len()
        );

        Ok(Self {
            f,
            t: t0,
            y: y0.to_vec(),
            h,
            t_bound,
            vectorized: options.vectorized,
            dydt: vec![0.0; y0.len()],
            nfev: 0,
            warnings,
        })
    }

    /// Fixed step size.
    pub fn h(&self) -> Float {
        self.h
    }

    pub fn vectorized(&self) -> bool {
        self.vectorized
    }

    /// Warnings raised during construction.
    pub fn warnings(&self) -> &[ConfigurationWarning] {
        &self.warnings
    }
}

impl<'a, F: ODE> Stepper for ForwardEuler<'a, F> {
    type Interpolant = LinearInterpolant;

    fn step(&mut self) -> StepOutcome {
        let t_old = self.t;
        let y_old = self.y.clone();

        self.f.ode(self.t, &self.y, &mut self.dydt);
        self.nfev += 1;

        // Clamp the last step to the bound, keeping the derivative from t_old.
        let mut t_new = self.t + self.h;
        let mut h = self.h;
        if t_new > self.t_bound {
            t_new = self.t_bound;
            h = t_new - self.t;
        }

        for (yi, dyi) in self.y.iter_mut().zip(&self.dydt) {
            *yi += h * dyi;
        }
        self.t = t_new;

        log::trace!("euler step: t = {t_old} -> {t_new}");

        StepOutcome::Accepted(StepResult {
            t_old,
            t_new,
            y_old,
            y_new: self.y.clone(),
        })
    }

    fn dense_output(&self, step: &StepResult) -> LinearInterpolant {
        LinearInterpolant::from(step)
    }

    fn t(&self) -> Float {
        self.t
    }

    fn y(&self) -> &[Float] {
        &self.y
    }

    fn t_bound(&self) -> Float {
        self.t_bound
    }

    fn direction(&self) -> Float {
        1.0
    }

    fn nfev(&self) -> usize {
        self.nfev
    }
}
