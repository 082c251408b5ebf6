//! The single-step contract shared by integration methods.

use crate::{Float, core::interpolate::Interpolate};

/// Boundary data of one completed step.
///
/// Produced by [`Stepper::step`] and handed back to [`Stepper::dense_output`],
/// so the link between a step and its dense output is explicit data rather
/// than state hidden in the stepper.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub t_old: Float,
    pub t_new: Float,
    pub y_old: Vec<Float>,
    pub y_new: Vec<Float>,
}

impl StepResult {
    /// Length of the step; zero for the degenerate step of an empty span.
    pub fn h(&self) -> Float {
        self.t_new - self.t_old
    }
}

/// Outcome of a single call to [`Stepper::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Accepted(StepResult),
    Rejected(String),
}

impl StepOutcome {
    pub fn success(&self) -> bool {
        matches!(self, StepOutcome::Accepted(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            StepOutcome::Accepted(_) => None,
            StepOutcome::Rejected(msg) => Some(msg),
        }
    }
}

/// A one-step integration method.
///
/// Implementors own the integration state and advance it by one step per
/// call. The driver ([`crate::solve::Solver`]) is responsible for stopping at
/// the bound and for refusing to step a finished integration.
pub trait Stepper {
    /// Dense output type covering one step.
    type Interpolant: Interpolate;

    /// Advance the state by one step.
    fn step(&mut self) -> StepOutcome;

    /// Build the dense output for a step previously returned by [`Stepper::step`].
    fn dense_output(&self, step: &StepResult) -> Self::Interpolant;

    /// Current time.
    fn t(&self) -> Float;

    /// Current state.
    fn y(&self) -> &[Float];

    /// Time beyond which the integration must not proceed.
    fn t_bound(&self) -> Float;

    /// Integration direction, +1 or -1.
    fn direction(&self) -> Float;

    /// Number of right-hand side evaluations so far.
    fn nfev(&self) -> usize;
}
