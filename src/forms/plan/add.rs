use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AddPlan {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
}

impl Into<models::Plan> for AddPlan {
    fn into(self) -> models::Plan {
        let mut item = models::Plan::default();
        item.name = self.name;
        item.price = self.price;
        item.created_at = Utc::now();
        item.updated_at = Utc::now();
        item
    }
}
