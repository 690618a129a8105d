use std::sync::Arc;

use sharefinder::Sharefinder;
use sharefinder_alphavantage::AlphaVantageConnector;
use sharefinder_core::{Credentials, SharefinderConfig, SharefinderError};
use sharefinder_fmp::FmpConnector;
use sharefinder_openai::OpenAiConnector;
use sharefinder_whalewisdom::WhaleWisdomConnector;

/// Register every provider connector, sharing one HTTP client.
///
/// The estimate connector is added only when the fallback is enabled and an
/// `OpenAI` key was loaded.
///
/// # Errors
/// Propagates builder validation errors.
pub fn build_finder(
    creds: &Credentials,
    cfg: SharefinderConfig,
) -> Result<Sharefinder, SharefinderError> {
    let http = reqwest::Client::new();
    let ep = &cfg.endpoints;

    let fmp = FmpConnector::builder(creds.fmp_api_key.clone())
        .base_url(ep.fmp.clone())
        .http_client(http.clone())
        .build();
    let av = AlphaVantageConnector::builder(creds.alpha_vantage_api_key.clone())
        .base_url(ep.alpha_vantage.clone())
        .http_client(http.clone())
        .build();
    let ww = WhaleWisdomConnector::builder(
        creds.whale_wisdom_shared_key.clone(),
        creds.whale_wisdom_secret_key.clone(),
    )
    .base_url(ep.whale_wisdom.clone())
    .http_client(http.clone())
    .build();

    let mut builder = Sharefinder::builder()
        .with_connector(Arc::new(fmp))
        .with_connector(Arc::new(av))
        .with_connector(Arc::new(ww));

    if cfg.llm_fallback
        && let Some(key) = &creds.openai_api_key
    {
        let llm = OpenAiConnector::builder(key.clone())
            .base_url(ep.openai.clone())
            .http_client(http)
            .build();
        builder = builder.with_connector(Arc::new(llm));
    }

    builder.config(cfg).build()
}
