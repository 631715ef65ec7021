use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Caller-supplied ids longer than this are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request correlation id, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

fn incoming_id(req: &Request) -> Option<String> {
    let raw = req.headers().get(&REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    (!raw.is_empty() && raw.len() <= MAX_REQUEST_ID_LEN).then(|| raw.to_owned())
}

/// Tags every request with a [`RequestId`] and echoes it as `x-request-id`.
///
/// A usable incoming header is kept; otherwise a `UUIDv4` is minted.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}
