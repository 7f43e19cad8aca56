mod add;
mod update;
mod upgrade;

pub use add::AddPlan as AdminAdd;
pub use update::UpdatePlan as AdminUpdate;
pub use upgrade::{PriceSnapshot, UpgradePrice};
