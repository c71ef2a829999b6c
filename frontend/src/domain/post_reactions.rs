//! Dislike reactions on posts.

use std::sync::Arc;

use tracing::{error, info};

use super::ports::PostApi;
use super::{DislikeId, Error, PostDislike, PostId};

/// Reads and toggles the current user's dislikes.
pub struct PostReactions<P: ?Sized> {
    posts: Arc<P>,
}

impl<P> PostReactions<P>
where
    P: PostApi + ?Sized,
{
    /// Service over the post port.
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Dislikes left on `post_id`.
    ///
    /// # Errors
    ///
    /// Returns the translated port error.
    pub async fn dislikes(&self, post_id: PostId) -> Result<Vec<PostDislike>, Error> {
        self.posts.list_dislikes(post_id).await.map_err(|err| {
            error!(%post_id, error = %err, "listing dislikes failed");
            Error::from(err)
        })
    }

    /// Dislike `post_id`.
    ///
    /// # Errors
    ///
    /// Returns the translated port error.
    pub async fn dislike(&self, post_id: PostId) -> Result<PostDislike, Error> {
        let dislike = self.posts.create_dislike(post_id).await.map_err(|err| {
            error!(%post_id, error = %err, "dislike failed");
            Error::from(err)
        })?;
        info!(%post_id, dislike_id = %dislike.id, "post disliked");
        Ok(dislike)
    }

    /// Withdraw a dislike.
    ///
    /// # Errors
    ///
    /// Returns the translated port error; a missing dislike maps to
    /// [`ErrorCode::NotFound`](super::ErrorCode::NotFound).
    pub async fn undo_dislike(&self, dislike_id: DislikeId) -> Result<(), Error> {
        self.posts.delete_dislike(dislike_id).await.map_err(|err| {
            error!(%dislike_id, error = %err, "removing dislike failed");
            Error::from(err)
        })?;
        info!(%dislike_id, "dislike removed");
        Ok(())
    }
}
