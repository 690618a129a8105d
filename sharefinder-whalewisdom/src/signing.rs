//! Request signing for the `WhaleWisdom` shell API.
//!
//! The shell authenticates each call with
//! `base64(HMAC-SHA1(secret, args_json + "\n" + timestamp))`. Everything here
//! is pure so the signature can be pinned by fixed vectors.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use sharefinder_core::SharefinderError;

type HmacSha1 = Hmac<Sha1>;

/// Timestamp layout expected by the shell: `YYYY-MM-DDTHH:MM:SSZ`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format `at` the way the shell expects it in the `timestamp` parameter.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Compute `api_sig` for one request.
///
/// `args_json` must be byte-for-byte the value sent as the `args` parameter.
///
/// # Errors
/// Returns `InvalidArg` if the HMAC cannot be keyed with `secret`.
pub fn sign(args_json: &str, timestamp: &str, secret: &str) -> Result<String, SharefinderError> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| SharefinderError::InvalidArg(format!("hmac key: {e}")))?;
    mac.update(args_json.as_bytes());
    mac.update(b"\n");
    mac.update(timestamp.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
