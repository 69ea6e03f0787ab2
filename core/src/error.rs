//! Error types for the GrowStocks API client.
//!
//! # Design
//! One enum covers the whole taxonomy. `RequestFailed` gets the entire
//! response envelope because the API reports failures in-band
//! (`{"success": false, ...}`) rather than through status codes; callers
//! inspect the envelope for the upstream error message. A body that is not
//! valid JSON at all folds into the same variant, carrying the raw text as
//! a JSON string.

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the client's build and parse methods.
#[derive(Debug, Error)]
pub enum Error {
    /// No redirect URI was passed and no default template is configured.
    #[error("redirect_uri is unset: no explicit uri and no default redirect configured")]
    MissingRedirectUri,

    /// A required field is missing from a response, or has the wrong shape.
    #[error("missing or invalid `{field}` in API response")]
    Decode { field: &'static str },

    /// A `date_time` string did not match the `YYYY-MM-DD HH:MM:SS` format.
    #[error("invalid date_time {value:?}")]
    DateParse {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    /// The API answered with `success: false`, or with a body that is not
    /// JSON (in which case the envelope is the raw text as a JSON string).
    #[error("request to api was unsuccessful: {envelope}")]
    RequestFailed { envelope: Value },

    /// A request payload could not be form-encoded.
    #[error("failed to encode request payload")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The underlying HTTP call failed (network, timeout, TLS). Propagated
    /// from the transport unchanged.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
