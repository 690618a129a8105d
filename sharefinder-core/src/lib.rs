//! sharefinder-core
//!
//! Core traits and helpers shared across the sharefinder ecosystem.
//!
//! - `connector`: the `FundConnector` trait and its capability provider traits.
//! - `metrics`: derived per-share metrics (estimated NAV).
//! - `coerce`: lenient numeric parsing of provider payloads.
//! - `http`: request execution with uniform error tagging for connectors.
//!
//! All shared data types from `sharefinder-types` are re-exported here so
//! connector crates depend on a single crate.
#![warn(missing_docs)]

/// Lenient numeric coercion of loosely typed provider fields.
pub mod coerce;
/// Connector capability traits and the primary `FundConnector` interface.
pub mod connector;
/// HTTP execution helpers used by connector crates.
pub mod http;
/// Derived metrics computed from a resolved profile.
pub mod metrics;

pub use connector::{EstimateProvider, FundConnector, FundProfileProvider};
pub use metrics::{estimate_nav, nav_for_display, resolve_fund};
pub use sharefinder_types::*;
