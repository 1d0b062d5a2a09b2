//! HTTP Error Handling
//!
//! 服务层的所有错误统一返回 500 和空对象，错误细节只写入服务端日志。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::Empty;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub struct ApiError {
    context: String,
    source: ApplicationError,
}

impl ApiError {
    /// `context` 描述失败的操作（含 id），仅用于日志
    pub fn new(context: impl Into<String>, source: ApplicationError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.context);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(Empty {})).into_response()
    }
}
