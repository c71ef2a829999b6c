//! REST adapter for the community backend.
//!
//! One reqwest client implements [`GroupApi`], [`PostApi`] and [`UserApi`].
//!
//! [`GroupApi`]: crate::domain::ports::GroupApi
//! [`PostApi`]: crate::domain::ports::PostApi
//! [`UserApi`]: crate::domain::ports::UserApi

mod client;
mod dto;

pub use client::RestApiClient;
