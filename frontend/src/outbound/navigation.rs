//! Navigator adapter for headless use.

use tracing::info;

use crate::domain::ports::{Navigator, Route};

/// Logs each navigation request instead of driving a router.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(path = %route, "navigate");
    }
}
