//! Outbound adapters implementing the domain ports.

pub mod navigation;
pub mod rest;
