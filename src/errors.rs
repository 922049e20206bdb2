use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

#[derive(Debug)]
pub enum ErrorBody {
    Page(String),
    Api(String),
}

impl AppError {
    pub fn page_not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::Page(message.into()),
        }
    }

    pub fn api_not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::Api(message.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.body {
            ErrorBody::Page(message) => {
                (self.status, Html(format!("<h1>{message}</h1>"))).into_response()
            }
            ErrorBody::Api(message) => {
                (self.status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
