use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error("a plan already exists")]
    Duplicate,
    #[error("failed to insert the plan")]
    Query,
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Plan>, String> {
    let query_span = tracing::info_span!("Fetching plan by ID");
    sqlx::query_as::<_, models::Plan>(
        r#"
        SELECT id, name, price, created_at, updated_at
        FROM plans
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch plan: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_first(pool: &PgPool) -> Result<Option<models::Plan>, String> {
    let query_span = tracing::info_span!("Checking for an existing plan");
    sqlx::query_as::<_, models::Plan>(
        r#"
        SELECT id, name, price, created_at, updated_at
        FROM plans
        ORDER BY id
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch plan: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Plan>, String> {
    let query_span = tracing::info_span!("Fetching all plans");
    sqlx::query_as::<_, models::Plan>(
        r#"
        SELECT id, name, price, created_at, updated_at
        FROM plans
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch plans: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, plan: models::Plan) -> Result<models::Plan, InsertError> {
    let query_span = tracing::info_span!("Saving new plan into the database");
    sqlx::query_as::<_, models::Plan>(
        r#"
        INSERT INTO plans (name, price, created_at, updated_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, created_at, updated_at
        "#,
    )
    .bind(plan.name)
    .bind(plan.price)
    .bind(plan.created_at)
    .bind(plan.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::error!("Duplicate plan insert rejected: {:?}", db_err);
            InsertError::Duplicate
        }
        err => {
            tracing::error!("Failed to insert plan: {:?}", err);
            InsertError::Query
        }
    })
}

pub async fn update(pool: &PgPool, plan: models::Plan) -> Result<models::Plan, String> {
    let query_span = tracing::info_span!("Updating plan");
    sqlx::query_as::<_, models::Plan>(
        r#"
        UPDATE plans
        SET
            name = $2,
            price = $3,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, price, created_at, updated_at
        "#,
    )
    .bind(plan.id)
    .bind(plan.name)
    .bind(plan.price)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        tracing::info!("Plan {} has been saved to database", result.id);
        result
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Plan not updated".to_string()
    })
}
