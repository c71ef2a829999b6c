//! Process-wide stores shared between views.
//!
//! Both stores wrap a `tokio::sync::watch` channel: writers replace the
//! value, views hold receivers and re-render on change. The last writer
//! wins.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::ports::{ApiError, UserApi};
use super::{Post, SessionUser};

/// Holds the authenticated user's record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<SessionUser>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }
}

impl SessionStore {
    /// Store with no user loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user.
    pub fn current(&self) -> Option<SessionUser> {
        self.tx.borrow().clone()
    }

    /// Replace the stored user.
    pub fn replace(&self, user: SessionUser) {
        self.tx.send_replace(Some(user));
    }

    /// Receiver notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.tx.subscribe()
    }

    /// Reload the user from the backend and replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns the port error; the stored record is left untouched.
    pub async fn refresh<U>(&self, users: &U) -> Result<SessionUser, ApiError>
    where
        U: UserApi + ?Sized,
    {
        let user = users.fetch_current_user().await?;
        debug!(user_id = %user.id, groups = user.groups.len(), "session refreshed");
        self.replace(user.clone());
        Ok(user)
    }
}

/// Posts shown in the discussion view.
#[derive(Debug, Clone)]
pub struct PostFeed {
    tx: Arc<watch::Sender<Vec<Post>>>,
}

impl Default for PostFeed {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }
}

impl PostFeed {
    /// Empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the listed posts.
    pub fn posts(&self) -> Vec<Post> {
        self.tx.borrow().clone()
    }

    /// Replace every listed post.
    pub fn replace(&self, posts: Vec<Post>) {
        self.tx.send_replace(posts);
    }

    /// Add a post at the end of the list.
    pub fn append(&self, post: Post) {
        self.tx.send_modify(|posts| posts.push(post));
    }

    /// Receiver notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Post>> {
        self.tx.subscribe()
    }
}
