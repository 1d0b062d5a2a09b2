//! HTTP Middleware
//!
//! 访问日志中间件：每个请求一行，记录方法、URI、状态码与耗时

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 访问日志中间件
///
/// 只记录访问信息，失败原因由 `ApiError::into_response()` 记录。
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}
