//! Headless group and discussion forms for the community backend.
//!
//! The [`domain`] module owns drafts, validation and the submit workflows;
//! [`outbound`] holds the REST and navigation adapters that satisfy its
//! ports. [`config`] and [`telemetry`] wire the binary.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;
