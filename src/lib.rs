//! A fixed-step forward Euler integrator for initial value problems (IVPs) of ordinary differential equations (ODEs).
//!
//! The crate is built around two small traits: [`Stepper`](core::stepper::Stepper), which advances
//! an integration by one step, and [`Interpolate`](core::interpolate::Interpolate), which evaluates
//! the dense output of a completed step. [`ForwardEuler`](methods::euler::ForwardEuler) and
//! [`LinearInterpolant`](methods::euler::LinearInterpolant) implement them; [`solve::solve_ivp()`]
//! drives the loop.

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
