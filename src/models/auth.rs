use crate::helpers::JsonResponse;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde_derive::{Deserialize, Serialize};
use std::future::{ready, Ready};

/// Caller identity resolved by the authentication middleware. Inserted
/// into request extensions once per request and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: String,
}

impl FromRequest for AuthContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| {
                    JsonResponse::<AuthContext>::build().unauthorized("Authentication required")
                }),
        )
    }
}
