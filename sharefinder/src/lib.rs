//! Sharefinder looks up shares outstanding for an ETF or fund by asking
//! several providers in a fixed order.
//!
//! Overview
//! - Structured connectors (`FundProfileProvider`) are tried in `Source`
//!   order: FMP, then Alpha Vantage, then `WhaleWisdom`.
//! - The first record with a positive share count wins and stops the chain.
//!   A later record with shares replaces an earlier partial one; among
//!   partial records the first one obtained is kept.
//! - Provider errors never escape a lookup. They are logged (with the
//!   `tracing` feature) and the actionable ones are collected as warnings.
//! - When no record has shares and the LLM fallback is enabled, a single
//!   `EstimateProvider` is asked for free text, which is returned verbatim.
//!
//! Every lookup ends in exactly one [`LookupOutcome`]:
//! `Resolved`, `Partial`, `Estimated`, or `NotFound`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sharefinder::Sharefinder;
//!
//! let finder = Sharefinder::builder()
//!     .with_connector(Arc::new(FmpConnector::new(creds.fmp_api_key.clone())))
//!     .with_connector(Arc::new(AlphaVantageConnector::new(creds.alpha_vantage_api_key.clone())))
//!     .with_connector(Arc::new(OpenAiConnector::new(openai_key)))
//!     .build()?;
//!
//! let report = finder.lookup(&Symbol::new("ARKK")?).await;
//! ```
#![warn(missing_docs)]

mod core;
mod lookup;
mod resolver;

pub use crate::core::{Sharefinder, SharefinderBuilder};
pub use sharefinder_core::{
    LookupOutcome, LookupReport, Resolution, ResolvedFund, SharefinderConfig, SharefinderError,
    Source, Symbol,
};
