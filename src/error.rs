//! Errors and warnings for integration methods

use crate::Float;

/// Errors returned by the stepper constructors and the integration drivers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("complex-valued states are not supported by this method")]
    ComplexUnsupported,
    #[error("step size h must be finite and positive (got {0})")]
    InvalidStepSize(Float),
    #[error("t0 and t_bound must be finite (got t0 = {t0}, t_bound = {t_bound})")]
    NonFiniteTime { t0: Float, t_bound: Float },
    #[error("attempt to step on a solver that is no longer running")]
    NotRunning,
    #[error("dense output requested before any step was taken")]
    NoStepTaken,
    #[error("invalid t_eval: {0}")]
    InvalidTEval(String),
}

/// Non-fatal warning raised when unrecognized configuration keys are supplied.
///
/// Integration proceeds as if the keys were absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the following arguments have no effect for a chosen solver: {}", .keys.join(", "))]
pub struct ConfigurationWarning {
    pub keys: Vec<String>,
}

/// Accept but warn about extraneous configuration keys.
///
/// Emits a single `log::warn!` and returns the warning so the caller can keep it.
pub(crate) fn warn_extraneous(keys: &[String]) -> Option<ConfigurationWarning> {
    if keys.is_empty() {
        return None;
    }
    let warning = ConfigurationWarning {
        keys: keys.to_vec(),
    };
    log::warn!("{warning}");
    Some(warning)
}
