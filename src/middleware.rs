//! HTTP middleware: request trace and security headers.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Log method and path of every request, plus the resulting status.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(%method, %uri, status = response.status().as_u16(), "request");
    response
}

/// Middleware that adds security headers to all responses.
///
/// - **Cache-Control: no-store**: balances and tokens must not be cached.
/// - **Referrer-Policy: no-referrer**
/// - **X-Content-Type-Options: nosniff**
/// - **X-Frame-Options: DENY**: no framing of the banking page.
/// - **Content-Security-Policy**: same-origin only, no inline script.
///
/// # Usage
///
/// ```rust,no_run
/// use axum::Router;
/// use axum::middleware;
/// use minibank::middleware::security_headers;
///
/// let app: Router = Router::new()
///     .layer(middleware::from_fn(security_headers));
/// ```
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("cache-control", HeaderValue::from_static("no-store"));
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self'; \
             style-src 'self'; \
             object-src 'none'; \
             frame-ancestors 'none'; \
             base-uri 'self'; \
             form-action 'self'",
        ),
    );

    response
}
