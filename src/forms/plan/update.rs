use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct UpdatePlan {
    pub id: i32,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
}

impl UpdatePlan {
    pub fn update(self, item: &mut models::Plan) {
        item.name = self.name;
        item.price = self.price;
    }
}
