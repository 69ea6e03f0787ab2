//! Shared decoding of the `{"success": bool, ...}` response envelope.
//!
//! # Design
//! Every endpoint answers with the same wrapper, so the success check lives
//! in exactly one place and both execution modes (blocking and async) run
//! it unchanged. Status codes are deliberately ignored here: the API
//! reports failures in-band through the `success` flag, and a body that is
//! not JSON at all is classified as the same `RequestFailed`, carrying the
//! raw text.

use serde_json::Value;

use crate::error::Error;
use crate::http::HttpResponse;

/// Check the envelope of `response` and return the parsed body.
///
/// Fails with [`Error::RequestFailed`] when the body is not valid JSON or
/// when `success` is anything other than `true`.
pub(crate) fn decode(response: &HttpResponse) -> Result<Value, Error> {
    let envelope: Value = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::RequestFailed {
                envelope: Value::String(response.body.clone()),
            })
        }
    };
    if envelope.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(Error::RequestFailed { envelope });
    }
    Ok(envelope)
}

/// Coerce a wire value to an integer.
///
/// The API is inconsistent about numeric encoding: ids and amounts arrive
/// as JSON numbers, while `status`, `balance` and `discordID` show up as
/// numeric strings. Accept both.
pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
