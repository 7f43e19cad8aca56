use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Admin update plan.")]
#[put("")]
pub async fn admin_update_handler(
    ctx: models::AuthContext,
    form: web::Json<forms::plan::AdminUpdate>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Plan>::build().form_error(errors.to_string()));
    }

    db::user::fetch(pg_pool.get_ref(), ctx.user_id.as_str())
        .await
        .map_err(|err| JsonResponse::<models::Plan>::build().internal_server_error(err))?
        .filter(|caller| caller.is_admin)
        .ok_or_else(|| JsonResponse::<models::Plan>::build().unauthorized("Admin access required"))?;

    let mut item = db::plan::fetch(pg_pool.get_ref(), form.id)
        .await
        .map_err(|err| JsonResponse::<models::Plan>::build().internal_server_error(err))
        .and_then(|item| match item {
            Some(item) => Ok(item),
            _ => Err(JsonResponse::<models::Plan>::build().not_found("not found")),
        })?;

    form.into_inner().update(&mut item);

    db::plan::update(pg_pool.get_ref(), item)
        .await
        .map(|item| {
            JsonResponse::<models::Plan>::build()
                .set_item(item)
                .ok("success")
        })
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            JsonResponse::<models::Plan>::build().internal_server_error("Plan not updated")
        })
}
