use crate::models;
use serde_derive::{Deserialize, Serialize};

/// Response body of the account service `me` endpoint. Only the fields
/// this service cares about; the rest of the payload is ignored.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub user: Account,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "first_name")]
    pub first_name: String,
    #[serde(rename = "last_name")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "email_confirmed")]
    pub email_confirmed: bool,
}

impl TryInto<models::AuthContext> for UserForm {
    type Error = String;

    fn try_into(self) -> Result<models::AuthContext, Self::Error> {
        if self.user.id.is_empty() {
            return Err("account id is missing".to_string());
        }

        Ok(models::AuthContext {
            user_id: self.user.id,
        })
    }
}
