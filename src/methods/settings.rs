//! Settings for the fixed-step integrators

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug, Default)]
/// Construction options for [`crate::methods::euler::ForwardEuler`]
pub struct EulerOptions {
    /// Fixed step size. None defaults to `(t_bound - t0) / 100`.
    pub h: Option<Float>,
    /// Whether the right-hand side is vectorized. Stored only; the Euler
    /// update evaluates the right-hand side once per step either way.
    #[builder(default)]
    pub vectorized: bool,
    /// Complex-valued states are not supported; must remain `false`.
    #[builder(default)]
    pub support_complex: bool,
    /// Names of configuration keys the method does not recognize. They are
    /// accepted, reported once through a [`crate::error::ConfigurationWarning`],
    /// and otherwise ignored.
    #[builder(default)]
    pub extraneous: Vec<String>,
}
