use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetching user by ID");
    sqlx::query_as::<_, models::User>(
        r#"
        SELECT id, email, first_name, last_name, is_admin, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user: {:?}", err);
        "Could not fetch data".to_string()
    })
}
