use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

// Listing never fails for the caller. A broken storage backend yields an
// empty list and an error event for the operator.
#[tracing::instrument(name = "Anonymous list plans.")]
#[get("")]
pub async fn anonymous_list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let plans = match db::plan::fetch_all(pg_pool.get_ref()).await {
        Ok(plans) => plans,
        Err(err) => {
            tracing::error!("Serving an empty plan list, fetch failed: {}", err);
            Vec::new()
        }
    };

    Ok(JsonResponse::build().set_list(plans).ok("OK"))
}
