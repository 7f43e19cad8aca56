use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Caller-supplied price snapshots, deliberately not looked up in storage
/// so hypothetical upgrades can be quoted too.
#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePrice {
    #[validate]
    pub old_plan: PriceSnapshot,
    #[validate]
    pub new_plan: PriceSnapshot,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct PriceSnapshot {
    #[validate(minimum = 0.0)]
    pub price: f64,
}
