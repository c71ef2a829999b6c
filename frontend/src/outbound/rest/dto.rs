//! Wire DTOs for the community backend.
//!
//! Responses decode into these first and are mapped into domain records in
//! one pass. Request DTOs borrow from the domain request.

use serde::{Deserialize, Serialize};

use crate::domain::{
    DislikeId, Group, GroupId, GroupWriteRequest, Post, PostDislike, PostId, PostWriteRequest,
    SessionUser, TopicSelection, UserId,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GroupDto {
    pub(super) id: i64,
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) rules: Option<String>,
    pub(super) avatar: Option<String>,
    pub(super) topics: Option<Vec<String>>,
    pub(super) posts: Option<Vec<PostDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDto {
    pub(super) id: i64,
    pub(super) body: Option<String>,
    pub(super) photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub(super) id: i64,
    pub(super) name: Option<String>,
    pub(super) email: Option<String>,
    pub(super) groups: Option<Vec<GroupDto>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PostDislikeDto {
    pub(super) id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GroupWriteDto<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<&'a str>,
    avatar: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostWriteDto<'a> {
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo: Option<&'a str>,
}

impl GroupDto {
    pub(super) fn into_domain(self) -> Group {
        let id = GroupId::new(self.id);
        let topics = self.topics.unwrap_or_default();
        let topics = TopicSelection::from_labels(topics.iter().map(String::as_str));
        Group {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            rules: self.rules.filter(|rules| !rules.is_empty()),
            avatar: self.avatar.unwrap_or_default(),
            topics: topics.as_slice().to_vec(),
            posts: self
                .posts
                .unwrap_or_default()
                .into_iter()
                .map(|post| post.into_domain(id))
                .collect(),
        }
    }
}

impl PostDto {
    pub(super) fn into_domain(self, group_id: GroupId) -> Post {
        Post {
            id: PostId::new(self.id),
            group_id,
            body: self.body.unwrap_or_default(),
            photo: self.photo.filter(|photo| !photo.is_empty()),
        }
    }
}

impl UserDto {
    pub(super) fn into_domain(self) -> SessionUser {
        SessionUser {
            id: UserId::new(self.id),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            groups: self
                .groups
                .unwrap_or_default()
                .into_iter()
                .map(GroupDto::into_domain)
                .collect(),
        }
    }
}

impl PostDislikeDto {
    pub(super) fn into_domain(self, post_id: PostId) -> PostDislike {
        PostDislike {
            id: DislikeId::new(self.id),
            post_id,
        }
    }
}

impl<'a> From<&'a GroupWriteRequest> for GroupWriteDto<'a> {
    fn from(request: &'a GroupWriteRequest) -> Self {
        Self {
            title: &request.title,
            description: &request.description,
            rules: request.rules.as_deref(),
            avatar: &request.avatar,
        }
    }
}

impl<'a> From<&'a PostWriteRequest> for PostWriteDto<'a> {
    fn from(request: &'a PostWriteRequest) -> Self {
        Self {
            body: request.body.as_ref(),
            photo: request.photo.as_deref(),
        }
    }
}
