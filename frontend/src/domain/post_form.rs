//! Controller behind the post composer.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use super::ports::PostApi;
use super::submission::advance;
use super::{
    FieldErrors, FormEvent, FormField, FormStatus, GroupId, Post, PostDraft, SubmitError,
    SubmitOutcome, SubmitStep,
};

/// Callback invoked with each post the form creates.
pub type PostCreatedCallback = Box<dyn FnMut(&Post) + Send>;

/// Composes a post inside one group.
///
/// The body is validated locally (required, at most 255 characters) before
/// any network call.
pub struct PostForm<P: ?Sized> {
    posts: Arc<P>,
    group_id: GroupId,
    draft: PostDraft,
    status: FormStatus,
    on_created: Option<PostCreatedCallback>,
}

impl<P: ?Sized> fmt::Debug for PostForm<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostForm")
            .field("group_id", &self.group_id)
            .field("draft", &self.draft)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<P> PostForm<P>
where
    P: PostApi + ?Sized,
{
    /// Empty composer for `group_id`.
    pub fn new(posts: Arc<P>, group_id: GroupId) -> Self {
        Self {
            posts,
            group_id,
            draft: PostDraft::new(),
            status: FormStatus::new(),
            on_created: None,
        }
    }

    /// Register the completion callback.
    #[must_use]
    pub fn with_on_created(mut self, callback: impl FnMut(&Post) + Send + 'static) -> Self {
        self.on_created = Some(Box::new(callback));
        self
    }

    /// Group the post goes into.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Current draft values.
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Current submit status.
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Type into the body input.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
        advance(&mut self.status, FormEvent::Edit);
    }

    /// Accept the URL produced by the image uploader.
    pub fn set_photo(&mut self, url: impl Into<String>) {
        self.draft.set_photo(url);
        advance(&mut self.status, FormEvent::Edit);
    }

    /// "Discard image": drop the photo, keep the body.
    pub fn discard_photo(&mut self) {
        self.draft.discard_photo();
        advance(&mut self.status, FormEvent::Edit);
    }

    /// Validate the body.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(err) = self.draft.to_write_request() {
            errors.record(FormField::Body, err.into());
        }
        errors
    }

    /// Validate, create the post, notify the callback and clear the draft.
    pub async fn submit(&mut self) -> SubmitOutcome<Post> {
        if !self.status.can_submit() {
            return SubmitOutcome::Ignored;
        }

        advance(&mut self.status, FormEvent::Validate);
        let request = match self.draft.to_write_request() {
            Ok(request) => request,
            Err(err) => {
                advance(&mut self.status, FormEvent::Reject);
                let mut errors = FieldErrors::new();
                errors.record(FormField::Body, err.into());
                return SubmitOutcome::Rejected(errors);
            }
        };

        advance(&mut self.status, FormEvent::Submit);
        match self.posts.create_post(self.group_id, &request).await {
            Ok(post) => {
                info!(group_id = %self.group_id, post_id = %post.id, "post created");
                if let Some(callback) = self.on_created.as_mut() {
                    callback(&post);
                }
                self.draft = PostDraft::new();
                advance(&mut self.status, FormEvent::Succeed);
                SubmitOutcome::Succeeded(post)
            }
            Err(err) => {
                let err = SubmitError::new(SubmitStep::CreatePost, 0, err);
                error!(
                    group_id = %self.group_id,
                    retryable = err.retryable,
                    error = %err.source,
                    "post creation failed"
                );
                advance(&mut self.status, FormEvent::Fail);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
