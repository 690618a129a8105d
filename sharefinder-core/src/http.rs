use serde::de::DeserializeOwned;

use crate::SharefinderError;

/// Send `req` and decode a JSON body, tagging failures with `connector`.
///
/// - transport and body-read failures map to `Transport`, with the request URL
///   stripped so API keys passed as query parameters never reach logs;
/// - non-2xx responses map to `Status`;
/// - bodies that do not decode as `T` map to `Shape`.
///
/// # Errors
/// Returns one of the variants above; never panics on provider input.
pub async fn send_json<T: DeserializeOwned>(
    connector: &'static str,
    req: reqwest::RequestBuilder,
) -> Result<T, SharefinderError> {
    let resp = req
        .send()
        .await
        .map_err(|e| SharefinderError::transport(connector, e.without_url().to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(connector, status = status.as_u16(), "non-success response");
        return Err(SharefinderError::status(connector, status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| SharefinderError::transport(connector, e.without_url().to_string()))?;

    serde_json::from_str(&body).map_err(|e| SharefinderError::shape(connector, e.to_string()))
}
