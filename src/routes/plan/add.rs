use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Admin add plan.")]
#[post("")]
pub async fn admin_add_handler(
    ctx: models::AuthContext,
    form: web::Json<forms::plan::AdminAdd>,
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

    if let Some(existing) = db::plan::fetch_first(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<models::Plan>::build().internal_server_error(err))?
    {
        return Err(JsonResponse::<models::Plan>::build()
            .set_id(existing.id)
            .conflict("Plan already exists"));
    }

    let item: models::Plan = form.into_inner().into();
    db::plan::insert(pg_pool.get_ref(), item)
        .await
        .map(|item| {
            JsonResponse::<models::Plan>::build()
                .set_item(item)
                .ok("success")
        })
        .map_err(|err| match err {
            db::plan::InsertError::Duplicate => {
                JsonResponse::<models::Plan>::build().conflict("Plan already exists")
            }
            db::plan::InsertError::Query => {
                JsonResponse::<models::Plan>::build().internal_server_error("Record not added")
            }
        })
}
