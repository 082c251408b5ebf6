//! High-level solve module: the step driver and a SciPy-like `solve_ivp`.

pub mod cont;
pub mod options;
pub mod solout;
pub mod solution;
pub mod solve_ivp;
pub mod solver;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use cont::OdeSolution;
pub use options::IVPOptions;
pub use solution::IVPSolution;
pub use solve_ivp::{integrate, solve_ivp, solve_ivp_with_solout};
pub use solver::{Solver, SolverStatus};
