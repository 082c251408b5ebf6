// Numerical methods

pub mod euler;
pub mod settings;
