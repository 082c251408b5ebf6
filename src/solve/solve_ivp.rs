//! SciPy-like solve_ivp entry point implementation

use crate::{
    Float,
    core::{
        ode::ODE,
        solout::{ControlFlag, DummySolOut, SolOut},
        status::Status,
        stepper::Stepper,
    },
    error::Error,
    methods::euler::{EulerOptions, ForwardEuler, LinearInterpolant},
};

use super::{
    cont::OdeSolution,
    options::IVPOptions,
    solout::DefaultSolOut,
    solution::IVPSolution,
    solver::{Solver, SolverStatus},
};

/// Solve an initial value problem with the forward Euler method.
///
/// Integrates from `t0` until `t_bound` is reached. See [`IVPOptions`] for
/// sampling and dense output controls.
pub fn solve_ivp<F>(
    f: &F,
    t0: Float,
    t_bound: Float,
    y0: &[Float],
    options: IVPOptions,
) -> Result<IVPSolution, Error>
where
    F: ODE,
{
    solve_ivp_with_solout(f, t0, t_bound, y0, options, &mut DummySolOut)
}

/// Like [`solve_ivp`], additionally invoking `solout` once at `t0` and after every step.
///
/// The callback may stop the integration early by returning
/// [`ControlFlag::Interrupt`]; the solution then ends at the last completed
/// step and reports [`Status::Interrupted`].
pub fn solve_ivp_with_solout<F, S>(
    f: &F,
    t0: Float,
    t_bound: Float,
    y0: &[Float],
    options: IVPOptions,
    solout: &mut S,
) -> Result<IVPSolution, Error>
where
    F: ODE,
    S: SolOut,
{
    let method_options = EulerOptions {
        h: options.h,
        vectorized: options.vectorized,
        support_complex: false,
        extraneous: options.extraneous.clone(),
    };
    let stepper = ForwardEuler::new(f, t0, y0, t_bound, method_options)?;
    let warnings = stepper.warnings().to_vec();

    let mut sol = integrate(stepper, &options, solout)?;
    sol.warnings = warnings;
    Ok(sol)
}

/// Drive any [`Stepper`] from its current state to its bound.
///
/// Samples step endpoints or `options.t_eval`, collects dense output when
/// `options.dense_output` is set, and invokes `solout` once at the start and
/// after every step. The method-specific options `h`, `vectorized` and
/// `extraneous` are ignored here; they configure the stepper itself.
pub fn integrate<St, S>(
    stepper: St,
    options: &IVPOptions,
    solout: &mut S,
) -> Result<IVPSolution, Error>
where
    St: Stepper<Interpolant = LinearInterpolant>,
    S: SolOut,
{
    let (t0, t_bound) = (stepper.t(), stepper.t_bound());
    let y0 = stepper.y().to_vec();
    options.validate(t0, t_bound)?;

    let mut solver = Solver::new(stepper);

    let direction = if t_bound >= t0 { 1.0 } else { -1.0 };
    let mut default_solout = DefaultSolOut::new(options.t_eval.as_deref(), direction, solout);
    let mut dense = options.dense_output.then(OdeSolution::new);
    let mut status = Status::Success;
    let mut message = None;

    let initial = LinearInterpolant::new(t0, t0, y0.clone(), y0.clone());
    if default_solout.solout(t0, t0, &y0, &initial) == ControlFlag::Interrupt {
        status = Status::Interrupted;
    }

    while status == Status::Success && solver.status() == SolverStatus::Running {
        if let Some(msg) = solver.step()? {
            status = Status::Failed;
            message = Some(msg);
            break;
        }

        // The only zero-length step is the one that closes an empty span.
        let interp = solver.dense_output()?;
        let (t_old, t) = (solver.t_old().unwrap_or(t0), solver.t());
        if t_old == t {
            continue;
        }

        if default_solout.solout(t_old, t, solver.y(), &interp) == ControlFlag::Interrupt {
            status = Status::Interrupted;
        }
        if let Some(dense) = dense.as_mut() {
            dense.push(interp);
        }
    }

    log::debug!(
        "solve_ivp: status = {status:?}, t = {}, nstep = {}, nfev = {}",
        solver.t(),
        solver.nstep(),
        solver.nfev()
    );

    let (t, y) = default_solout.into_data();
    Ok(IVPSolution {
        t,
        y,
        nfev: solver.nfev(),
        nstep: solver.nstep(),
        status,
        message,
        warnings: Vec::new(),
        dense_output: dense,
    })
}
