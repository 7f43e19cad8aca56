mod auth;
mod plan;
pub mod user;

pub use auth::*;
pub use plan::*;
pub use user::*;
