//! Driven port for posts and the dislike reactions attached to them.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{DislikeId, GroupId, Post, PostDislike, PostId, PostWriteRequest};

/// Port for post creation and dislike reactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Create a post under `group_id`.
    async fn create_post(
        &self,
        group_id: GroupId,
        request: &PostWriteRequest,
    ) -> Result<Post, ApiError>;

    /// List the dislikes left on a post.
    async fn list_dislikes(&self, post_id: PostId) -> Result<Vec<PostDislike>, ApiError>;

    /// Dislike a post as the current user.
    async fn create_dislike(&self, post_id: PostId) -> Result<PostDislike, ApiError>;

    /// Withdraw a dislike.
    async fn delete_dislike(&self, dislike_id: DislikeId) -> Result<(), ApiError>;
}
