mod add;
mod get;
mod update;
mod upgrade;

pub use add::*;
pub use get::*;
pub use update::*;
pub use upgrade::*;
