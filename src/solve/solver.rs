//! Lifecycle driver around a [`Stepper`].

use crate::{
    Float,
    core::stepper::{StepOutcome, StepResult, Stepper},
    error::Error,
};

/// State of a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Running,
    Finished,
    Failed,
}

/// Drives a [`Stepper`] one step at a time.
///
/// Stops the integration once the bound is reached, refuses further steps
/// after finishing or failing, and keeps the most recent [`StepResult`] so
/// dense output can be requested without arguments.
pub struct Solver<S: Stepper> {
    stepper: S,
    status: SolverStatus,
    last: Option<StepResult>,
    nstep: usize,
}

impl<S: Stepper> Solver<S> {
    pub fn new(stepper: S) -> Self {
        Self {
            stepper,
            status: SolverStatus::Running,
            last: None,
            nstep: 0,
        }
    }

    /// Perform one integration step.
    ///
    /// Returns the failure message of a rejected step, `None` otherwise. An
    /// accepted step that leaves `t` unchanged counts as a failure.
    /// A span that is already exhausted (`t == t_bound`) or an empty state
    /// finishes immediately with a zero-length step.
    pub fn step(&mut self) -> Result<Option<String>, Error> {
        if self.status != SolverStatus::Running {
            return Err(Error::NotRunning);
        }

        let t = self.stepper.t();
        if self.stepper.y().is_empty() || t == self.stepper.t_bound() {
            let y = self.stepper.y().to_vec();
            self.last = Some(StepResult {
                t_old: t,
                t_new: t,
                y_old: y.clone(),
                y_new: y,
            });
            self.status = SolverStatus::Finished;
            log::debug!("solver finished at t = {t} without stepping");
            return Ok(None);
        }

        match self.stepper.step() {
            StepOutcome::Accepted(step) if step.t_new == step.t_old => {
                let msg = "step size too small to advance t".to_string();
                log::debug!("step from t = {t} failed: {msg}");
                self.status = SolverStatus::Failed;
                Ok(Some(msg))
            }
            StepOutcome::Accepted(step) => {
                self.nstep += 1;
                let direction = self.stepper.direction();
                if direction * (step.t_new - self.stepper.t_bound()) >= 0.0 {
                    self.status = SolverStatus::Finished;
                    log::debug!(
                        "solver finished at t = {} after {} steps",
                        step.t_new,
                        self.nstep
                    );
                }
                self.last = Some(step);
                Ok(None)
            }
            StepOutcome::Rejected(msg) => {
                log::debug!("step from t = {t} failed: {msg}");
                self.status = SolverStatus::Failed;
                Ok(Some(msg))
            }
        }
    }

    /// Dense output covering the most recent step.
    pub fn dense_output(&self) -> Result<S::Interpolant, Error> {
        self.last
            .as_ref()
            .map(|step| self.stepper.dense_output(step))
            .ok_or(Error::NoStepTaken)
    }

    pub fn status(&self) -> SolverStatus {
        self.status
    }

    pub fn t(&self) -> Float {
        self.stepper.t()
    }

    pub fn y(&self) -> &[Float] {
        self.stepper.y()
    }

    /// Left end of the most recent step, if any step was taken.
    pub fn t_old(&self) -> Option<Float> {
        self.last.as_ref().map(|step| step.t_old)
    }

    pub fn last_step(&self) -> Option<&StepResult> {
        self.last.as_ref()
    }

    /// Number of accepted, non-degenerate steps.
    pub fn nstep(&self) -> usize {
        self.nstep
    }

    pub fn nfev(&self) -> usize {
        self.stepper.nfev()
    }

    pub fn stepper(&self) -> &S {
        &self.stepper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{interpolate::Interpolate, ode::ODE},
        methods::euler::{EulerOptions, ForwardEuler, LinearInterpolant},
    };

    struct Constant;

    impl ODE for Constant {
        fn ode(&self, _t: Float, _y: &[Float], dydt: &mut [Float]) {
            dydt.fill(1.0);
        }
    }

    /// Stepper that always rejects, standing in for a method that can fail.
    struct Failing;

    impl Stepper for Failing {
        type Interpolant = LinearInterpolant;

        fn step(&mut self) -> StepOutcome {
            StepOutcome::Rejected("right-hand side diverged".to_string())
        }

        fn dense_output(&self, step: &StepResult) -> LinearInterpolant {
            LinearInterpolant::from(step)
        }

        fn t(&self) -> Float {
            0.0
        }

        fn y(&self) -> &[Float] {
            &[0.0]
        }

        fn t_bound(&self) -> Float {
            1.0
        }

        fn direction(&self) -> Float {
            1.0
        }

        fn nfev(&self) -> usize {
            0
        }
    }

    #[test]
    fn runs_to_bound_then_stops() {
        let options = EulerOptions::builder().h(0.25).build();
        let stepper = ForwardEuler::new(&Constant, 0.0, &[0.0], 1.0, options).unwrap();
        let mut solver = Solver::new(stepper);
        assert!(matches!(solver.dense_output(), Err(Error::NoStepTaken)));

        while solver.status() == SolverStatus::Running {
            assert_eq!(solver.step().unwrap(), None);
        }
        assert_eq!(solver.status(), SolverStatus::Finished);
        assert_eq!(solver.t(), 1.0);
        assert_eq!(solver.y(), &[1.0]);
        assert_eq!(solver.nstep(), 4);
        assert_eq!(solver.nfev(), 4);
        assert_eq!(solver.t_old(), Some(0.75));
        assert!(matches!(solver.step(), Err(Error::NotRunning)));
    }

    #[test]
    fn empty_span_finishes_with_nan_dense_output() {
        let stepper = ForwardEuler::new(&Constant, 2.0, &[3.0], 2.0, EulerOptions::default()).unwrap();
        let mut solver = Solver::new(stepper);
        assert_eq!(solver.step().unwrap(), None);
        assert_eq!(solver.status(), SolverStatus::Finished);
        assert_eq!(solver.nfev(), 0);
        assert_eq!(solver.nstep(), 0);

        let interp = solver.dense_output().unwrap();
        let mut yi = [0.0];
        interp.interpolate(2.0, &mut yi);
        assert!(yi[0].is_nan());
    }

    #[test]
    fn rejected_step_marks_failure() {
        let mut solver = Solver::new(Failing);
        assert_eq!(solver.step().unwrap().as_deref(), Some("right-hand side diverged"));
        assert_eq!(solver.status(), SolverStatus::Failed);
        assert!(solver.last_step().is_none());
    }

    #[test]
    fn step_below_float_spacing_fails() {
        let t0 = 1.0e16;
        let stepper = ForwardEuler::new(&Constant, t0, &[0.0], t0 + 4.0, EulerOptions::default()).unwrap();
        let mut solver = Solver::new(stepper);
        assert_eq!(
            solver.step().unwrap().as_deref(),
            Some("step size too small to advance t")
        );
        assert_eq!(solver.status(), SolverStatus::Failed);
        assert_eq!(solver.nstep(), 0);
        assert!(matches!(solver.step(), Err(Error::NotRunning)));
    }

    #[test]
    fn reversed_span_stops_after_one_step() {
        // Direction is fixed at +1, so a bound below t0 counts as reached.
        let stepper = ForwardEuler::new(&Constant, 1.0, &[0.0], 0.0, EulerOptions::default()).unwrap();
        let mut solver = Solver::new(stepper);
        solver.step().unwrap();
        assert_eq!(solver.status(), SolverStatus::Finished);
        assert_eq!(solver.nstep(), 1);
    }
}
