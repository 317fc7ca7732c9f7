//! Decoding of the bearer credential's payload segment.
//!
//! The console never verifies signatures: it only needs the `role` claim to
//! decide what to show. The API remains the authority on every request.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Claims carried by the user credential.
///
/// Only `role` decides whether a payload is usable; the other claims are
/// read leniently and dropped when the issuer typed them unexpectedly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    pub role: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Expiry, seconds since the epoch (NumericDate, may be fractional).
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub exp: Option<f64>,
    /// Issued-at, seconds since the epoch.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub iat: Option<f64>,
}

/// Strings as-is, numbers stringified, anything else dropped.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => {
            warn!("ignoring non-text claim value {other}");
            None
        }
    })
}

fn lenient_seconds<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        other => {
            warn!("ignoring non-numeric time claim {other}");
            None
        }
    })
}

impl Claims {
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs as f64)
    }

    /// Name to greet the user with, if the issuer provided one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.sub.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {0}")]
    Segments(usize),
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };

    // some issuers keep the padding
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims = serde_json::from_slice(&bytes)?;

    if let Claims { iat: Some(iat), exp: Some(exp), .. } = &claims {
        log::debug!("credential issued at {iat}, expires at {exp}");
    }
    Ok(claims)
}
