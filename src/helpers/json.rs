use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Serialize)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, status: String, message: String, code: StatusCode) -> JsonResponse<T> {
        JsonResponse {
            status,
            message,
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok<I: Into<String>>(self, msg: I) -> HttpResponse {
        let json_response = self.into_response("OK".to_string(), msg.into(), StatusCode::OK);
        HttpResponse::Ok().json(json_response)
    }

    fn err_response<I: Into<String>>(self, code: StatusCode, msg: I) -> Error {
        let msg = msg.into();
        let json_response = self.into_response("Error".to_string(), msg.clone(), code);

        InternalError::from_response(msg, HttpResponse::build(code).json(json_response)).into()
    }

    pub(crate) fn form_error<I: Into<String>>(self, msg: I) -> Error {
        self.err_response(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.err_response(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn unauthorized<I: Into<String>>(self, msg: I) -> Error {
        self.err_response(StatusCode::UNAUTHORIZED, msg)
    }

    pub(crate) fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.err_response(StatusCode::NOT_FOUND, msg)
    }

    pub(crate) fn conflict<I: Into<String>>(self, msg: I) -> Error {
        self.err_response(StatusCode::CONFLICT, msg)
    }

    pub(crate) fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        let msg = msg.into();
        let msg = if msg.trim().is_empty() {
            "Internal server error".to_string()
        } else {
            msg
        };
        self.err_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn ok_wraps_item_with_200() {
        let response = JsonResponse::build().set_item("premium").ok("success");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn error_builders_set_matching_status() {
        let err = JsonResponse::<String>::build().not_found("not found");
        assert_eq!(err.as_response_error().status_code(), StatusCode::NOT_FOUND);

        let err = JsonResponse::<String>::build().unauthorized("nope");
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );

        let err = JsonResponse::<String>::build().conflict("duplicate");
        assert_eq!(err.as_response_error().status_code(), StatusCode::CONFLICT);
    }
}
