//! Driven port for the authenticated user's record.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::SessionUser;

/// Port for reading the current user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the full record of the authenticated user.
    async fn fetch_current_user(&self) -> Result<SessionUser, ApiError>;
}
