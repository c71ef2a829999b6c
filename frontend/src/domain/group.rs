//! Group records as returned by the backend.

use serde::Serialize;

use super::{GroupId, Post, Topic};

/// Placeholder avatar assigned to new group drafts until an image is
/// uploaded.
pub const DEFAULT_AVATAR_URL: &str = "https://res.cloudinary.com/dlvwrtpzq/image/upload/v1619987659/profilePhotos/placeholder_eo6jkp.png";

/// A group with its topic tags and the posts embedded in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Backend identifier.
    pub id: GroupId,
    /// Title, unique among groups.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Optional house rules.
    pub rules: Option<String>,
    /// Avatar image URL.
    pub avatar: String,
    /// Topic tags in record order.
    pub topics: Vec<Topic>,
    /// Posts embedded in the record, oldest first.
    pub posts: Vec<Post>,
}

/// Field values sent when creating or updating a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWriteRequest {
    /// Group title.
    pub title: String,
    /// Group description.
    pub description: String,
    /// House rules; `None` when left blank.
    pub rules: Option<String>,
    /// Avatar image URL.
    pub avatar: String,
}
