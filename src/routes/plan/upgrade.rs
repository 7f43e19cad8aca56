use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_derive::Serialize;
use serde_valid::Validate;

#[derive(Debug, Serialize)]
pub struct UpgradeQuote {
    pub price: f64,
}

#[tracing::instrument(name = "Quote plan upgrade price.")]
#[post("/upgrade_price")]
pub async fn upgrade_price_handler(
    form: web::Json<forms::plan::UpgradePrice>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<UpgradeQuote>::build().form_error(errors.to_string()));
    }

    let form = form.into_inner();
    if form.old_plan.price >= form.new_plan.price {
        return Err(JsonResponse::<UpgradeQuote>::build()
            .bad_request("New plan price must exceed the old plan price"));
    }

    let quote = UpgradeQuote {
        price: form.new_plan.price - form.old_plan.price,
    };

    Ok(JsonResponse::build().set_item(quote).ok("OK"))
}
