//! Sharefinder-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod credentials;
mod error;
mod profile;
mod reports;
mod symbol;

pub use config::{Endpoints, SharefinderConfig};
pub use connector::ConnectorKey;
pub use credentials::{
    ALPHA_VANTAGE_API_KEY, Credentials, FMP_API_KEY, OPENAI_API_KEY, WHALE_WISDOM_SECRET_KEY,
    WHALE_WISDOM_SHARED_KEY,
};
pub use error::SharefinderError;
pub use profile::{FundProfile, Source};
pub use reports::{LookupOutcome, LookupReport, Resolution, ResolvedFund};
pub use symbol::Symbol;
