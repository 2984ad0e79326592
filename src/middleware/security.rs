//! Response hardening applied to every request.
//!
//! # Responsibilities
//! - Redirect plain HTTP to HTTPS unless disabled (development / tests)
//! - Add frame, sniffing, CSP and referrer headers to every response
//! - Advertise fully permissive CORS (`Access-Control-Allow-Origin: *`)
//! - Add HSTS on requests that arrived over HTTPS
//!
//! Runs as the outermost layer so error responses, fallbacks and redirects
//! carry the same headers as successful ones.

use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

pub const FRAME_OPTIONS: &str = "SAMEORIGIN";
pub const CONTENT_TYPE_OPTIONS: &str = "nosniff";
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; object-src 'none'";
pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";
pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31556926; includeSubDomains";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityPolicy {
    pub force_https: bool,
}

impl SecurityPolicy {
    pub fn new(force_https: bool) -> Self {
        Self { force_https }
    }
}

fn is_secure(req: &Request) -> bool {
    if req.uri().scheme_str() == Some("https") {
        return true;
    }
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

fn https_redirect(req: &Request) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .unwrap_or("localhost");
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let target = format!("https://{}{}", host, path);
    debug!("Redirecting {} {} to {}", req.method(), req.uri(), target);

    match HeaderValue::from_str(&target) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

fn apply_headers(headers: &mut HeaderMap, secure: bool) {
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static(FRAME_OPTIONS));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static(CONTENT_TYPE_OPTIONS),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static(REFERRER_POLICY));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    if secure {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(STRICT_TRANSPORT_SECURITY),
        );
    }
}

pub async fn security_headers(
    State(policy): State<SecurityPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let secure = is_secure(&req);
    let mut response = if policy.force_https && !secure {
        https_redirect(&req)
    } else {
        next.run(req).await
    };
    apply_headers(response.headers_mut(), secure);
    response
}
