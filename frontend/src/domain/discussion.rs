//! Discussion view state: the post composer above a group's post list.

use std::sync::Arc;

use tracing::debug;

use super::ports::PostApi;
use super::{Group, GroupId, Post, PostFeed, PostForm};

/// Discussion page of one group.
///
/// The feed is seeded once from the group snapshot handed down by the
/// parent page. Later changes to that snapshot are not picked up; posts
/// created through [`Discussion::composer`] are appended to the feed.
pub struct Discussion<P: ?Sized> {
    posts: Arc<P>,
    group_id: GroupId,
    feed: PostFeed,
    seeded: bool,
}

impl<P> Discussion<P>
where
    P: PostApi + ?Sized,
{
    /// Discussion for `group_id` writing into `feed`.
    pub fn new(posts: Arc<P>, group_id: GroupId, feed: PostFeed) -> Self {
        Self {
            posts,
            group_id,
            feed,
            seeded: false,
        }
    }

    /// Seed the feed from the parent's group snapshot.
    ///
    /// Only the first call has an effect; it returns `true`. When the
    /// snapshot lists several groups, the last one's posts are shown. An
    /// empty snapshot leaves the feed as it was.
    pub fn mount(&mut self, snapshot: &[Group]) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;
        if let Some(group) = snapshot.last() {
            debug!(group_id = %group.id, posts = group.posts.len(), "seeding discussion feed");
            self.feed.replace(group.posts.clone());
        }
        true
    }

    /// Composer whose created posts land at the end of the feed.
    pub fn composer(&self) -> PostForm<P> {
        let feed = self.feed.clone();
        PostForm::new(Arc::clone(&self.posts), self.group_id)
            .with_on_created(move |post| feed.append(post.clone()))
    }

    /// Posts currently listed, oldest first.
    pub fn posts(&self) -> Vec<Post> {
        self.feed.posts()
    }
}
