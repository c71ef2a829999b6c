//! Posts and dislike reactions.

use std::fmt;

use serde::Serialize;

use super::{DislikeId, GroupId, PostId};

/// Maximum post body length in characters.
pub const POST_BODY_MAX: usize = 255;

/// Validation errors returned by [`PostBody::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostBodyValidationError {
    /// The body is empty or whitespace.
    #[error("post body must not be empty")]
    Empty,
    /// The body exceeds [`POST_BODY_MAX`] characters.
    #[error("post body must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// A validated post body.
///
/// ## Invariants
/// - non-empty once trimmed;
/// - at most [`POST_BODY_MAX`] characters (Unicode scalar values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct PostBody(String);

impl PostBody {
    /// Validate and construct a body.
    ///
    /// # Examples
    /// ```
    /// use community_frontend::domain::{PostBody, PostBodyValidationError};
    ///
    /// assert!(PostBody::new("hello").is_ok());
    /// assert_eq!(PostBody::new(""), Err(PostBodyValidationError::Empty));
    /// ```
    pub fn new(body: impl Into<String>) -> Result<Self, PostBodyValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(PostBodyValidationError::Empty);
        }
        if body.chars().count() > POST_BODY_MAX {
            return Err(PostBodyValidationError::TooLong { max: POST_BODY_MAX });
        }
        Ok(Self(body))
    }
}

impl AsRef<str> for PostBody {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PostBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostBody> for String {
    fn from(value: PostBody) -> Self {
        value.0
    }
}

/// A post inside a group. Posts are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: PostId,
    /// Owning group.
    pub group_id: GroupId,
    /// Body text as stored by the backend.
    pub body: String,
    /// Optional photo URL.
    pub photo: Option<String>,
}

/// Values sent when creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWriteRequest {
    /// Validated body.
    pub body: PostBody,
    /// Optional photo URL.
    pub photo: Option<String>,
}

/// A dislike left on a post by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDislike {
    /// Backend identifier of the reaction.
    pub id: DislikeId,
    /// The disliked post.
    pub post_id: PostId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Err(PostBodyValidationError::Empty))]
    #[case("   ", Err(PostBodyValidationError::Empty))]
    #[case(&"a".repeat(POST_BODY_MAX), Ok(()))]
    #[case(&"a".repeat(POST_BODY_MAX + 1), Err(PostBodyValidationError::TooLong { max: POST_BODY_MAX }))]
    #[case(&"ü".repeat(POST_BODY_MAX), Ok(()))]
    fn validates_body_length(
        #[case] raw: &str,
        #[case] expected: Result<(), PostBodyValidationError>,
    ) {
        assert_eq!(PostBody::new(raw).map(|_| ()), expected);
    }
}
