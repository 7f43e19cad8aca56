pub mod health_checks;
pub(crate) mod plan;

pub use health_checks::*;
