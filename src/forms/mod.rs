pub mod plan;
pub mod user;

pub use user::*;
