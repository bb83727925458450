//! # Bearer Token Claims
//!
//! Extracts the caller identity from a bearer token's payload segment.
//!
//! No signature verification happens here: the upstream transport validates
//! tokens before requests reach the handlers, and malformed tokens are a
//! normal adversarial input. Every decode failure collapses to `None` so a
//! bad token can never take down a request with anything other than a clean
//! authorization rejection.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Decode the subject identifier from a bearer token.
///
/// The token is treated as a JWT-shaped string: the second dot-separated
/// segment is base64url-decoded and parsed as JSON, and the `username` claim
/// is extracted and checked for UUID shape. The claim is returned verbatim,
/// case and all: ownership checks compare it against the declared owner as
/// raw strings, so a differently-spelled rendering of the same UUID never
/// authorizes. Returns `None` for any malformed token or claim; callers must
/// treat `None` as "unidentified" and reject.
pub fn decode_subject(token: &str) -> Option<String> {
    let claims = decode_payload(token)?;

    let username = claims.get("username").and_then(Value::as_str)?;

    if !is_uuid_shaped(username) {
        debug!("username claim is not a valid UUID");
        return None;
    }

    Some(username.to_string())
}

/// Hyphenated UUID shape, either case.
///
/// `Uuid::parse_str` alone would also accept simple, braced, and URN
/// spellings; the length guard restricts to the canonical 36-character form.
pub(crate) fn is_uuid_shaped(value: &str) -> bool {
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}

/// Decode the payload segment of a token into a JSON object.
fn decode_payload(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;

    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => {
            debug!("failed to decode token payload segment");
            return None;
        }
    };

    let claims: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(_) => {
            debug!("token payload is not valid JSON");
            return None;
        }
    };

    claims.is_object().then_some(claims)
}
