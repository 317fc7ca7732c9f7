use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::API_BASE;
use crate::session::SessionContext;

/// Failure of a single API call. Every call site decides on its own what a
/// 401 means for it; nothing here signs the user out.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("session rejected by the server (401)")]
    Unauthorized,
    #[error("HTTP {status} – {text}")]
    Status { status: u16, text: String },
    #[error("unexpected response body: {0}")]
    Decode(gloo_net::Error),
}

pub fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Credential headers for the current session. Absent credentials are
/// simply not sent.
pub fn auth_headers(session: &SessionContext) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(app) = session.app_credential() {
        headers.push(("Authorization", format!("Bearer {app}")));
    }
    if let Some(user) = session.credential() {
        headers.push(("X-User-Token", user));
    }
    headers
}

/// Error for a non-2xx status, `None` on success.
fn status_error(status: u16, text: &str) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized),
        status => Some(ApiError::Status {
            status,
            text: text.to_string(),
        }),
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    match status_error(resp.status(), &resp.status_text()) {
        None => Ok(resp),
        Some(e) => Err(e),
    }
}

async fn send<T>(
    session: &SessionContext,
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<Response, ApiError>
where
    T: Serialize + ?Sized,
{
    let mut builder = RequestBuilder::new(&url(path)).method(method);
    for (name, value) in auth_headers(session) {
        builder = builder.header(name, &value);
    }

    let resp = match body {
        Some(b) => builder.json(b)?.send().await?,
        None => builder.send().await?,
    };
    check_status(resp)
}

/// JSON call; the response body is decoded into `U`.
pub async fn fetch_json<T, U>(
    session: &SessionContext,
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<U, ApiError>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let resp = send(session, method, path, body).await?;
    resp.json().await.map_err(ApiError::Decode)
}

/// Call whose response body is ignored (204 / 200 without JSON).
pub async fn fetch_empty<T>(
    session: &SessionContext,
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<(), ApiError>
where
    T: Serialize + ?Sized,
{
    send(session, method, path, body).await.map(|_| ())
}
