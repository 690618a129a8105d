//! Library half of the `sharefinder` binary: connector wiring and rendering.

/// Build the orchestrator from credentials and configuration.
pub mod wiring;
/// Text and JSON presentation of a lookup report.
pub mod render;
