//! Forward (explicit) Euler integrator with linear dense output

mod forward_euler;
mod linear;

pub use crate::methods::settings::EulerOptions;
pub use forward_euler::ForwardEuler;
pub use linear::LinearInterpolant;
