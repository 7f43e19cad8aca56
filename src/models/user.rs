use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// Account row mirrored from the user service. Rows are provisioned
/// externally, this service only reads them to resolve permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
