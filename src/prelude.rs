//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ivp_euler::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Interpolate`, `Stepper`, `StepResult`, `StepOutcome`,
//!   `SolOut`, `ControlFlag`, `DummySolOut`, `Status`.
//! - The Euler method: `ForwardEuler`, `LinearInterpolant`, `EulerOptions`.
//! - High-level API: `Solver`, `SolverStatus`, `solve_ivp`, `solve_ivp_with_solout`, `integrate`, `IVPOptions`, `IVPSolution`, `OdeSolution`.
//!

pub use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        solout::{ControlFlag, DummySolOut, SolOut},
        status::Status,
        stepper::{StepOutcome, StepResult, Stepper},
    },
    error::{ConfigurationWarning, Error},
    methods::euler::{EulerOptions, ForwardEuler, LinearInterpolant},
    solve::{
        IVPOptions, IVPSolution, OdeSolution, Solver, SolverStatus, integrate, solve_ivp,
        solve_ivp_with_solout,
    },
};
