//! Domain ports for the hexagonal boundary.
//!
//! Forms depend only on these traits; `outbound` provides the REST and
//! navigation adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod api_error;
mod group_api;
mod navigator;
mod post_api;
mod user_api;

pub use api_error::ApiError;
#[cfg(test)]
pub use group_api::MockGroupApi;
pub use group_api::GroupApi;
pub use navigator::{Navigator, Route};
#[cfg(test)]
pub use post_api::MockPostApi;
pub use post_api::PostApi;
#[cfg(test)]
pub use user_api::MockUserApi;
pub use user_api::UserApi;
