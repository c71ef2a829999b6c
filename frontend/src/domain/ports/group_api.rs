//! Driven port for group records and their topic memberships.
//!
//! Topic membership is a many-to-many relation maintained by explicit
//! join/unjoin calls; `update_group` never touches topics.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{Group, GroupId, GroupWriteRequest, Topic};

/// Port for group CRUD and membership calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// Create a group and return the stored record.
    async fn create_group(&self, request: &GroupWriteRequest) -> Result<Group, ApiError>;

    /// Load one group record.
    async fn fetch_group(&self, group_id: GroupId) -> Result<Group, ApiError>;

    /// Replace a group's title, description, rules and avatar.
    async fn update_group(
        &self,
        group_id: GroupId,
        request: &GroupWriteRequest,
    ) -> Result<Group, ApiError>;

    /// Whether any group already uses `title`.
    async fn title_exists(&self, title: &str) -> Result<bool, ApiError>;

    /// Tag a group with a topic.
    async fn join_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError>;

    /// Remove a topic tag from a group.
    async fn unjoin_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError>;
}
