//! Domain types, form controllers and ports.
//!
//! Purpose: hold every rule the group and discussion pages enforce, free of
//! transport details. Controllers own draft state and drive the backend
//! through [`ports`]; adapters live in `crate::outbound`.
//!
//! Public surface:
//! - [`GroupCreateForm`], [`GroupEditForm`], [`PostForm`]: submit workflows.
//! - [`Discussion`]: feed seeding and composition.
//! - [`PostReactions`]: dislike reactions.
//! - [`SessionStore`], [`PostFeed`]: shared view state.
//! - [`Topic`], [`TopicSelection`]: the topic table and checkbox state.

pub mod ports;

mod discussion;
mod error;
mod form_state;
mod group;
mod group_create_form;
mod group_draft;
mod group_edit_form;
mod group_form;
mod ids;
mod post;
mod post_draft;
mod post_form;
mod post_reactions;
mod session;
mod submission;
mod topic;
pub mod topic_membership;
mod topic_selection;
mod user;
mod validation;

#[cfg(test)]
mod test_doubles;

pub use self::discussion::Discussion;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::form_state::{FormEvent, FormPhase, FormStatus, FormTransitionError};
pub use self::group::{DEFAULT_AVATAR_URL, Group, GroupWriteRequest};
pub use self::group_create_form::GroupCreateForm;
pub use self::group_draft::GroupDraft;
pub use self::group_edit_form::GroupEditForm;
pub use self::group_form::validate_group_draft;
pub use self::ids::{DislikeId, GroupId, PostId, UserId};
pub use self::post::{
    POST_BODY_MAX, Post, PostBody, PostBodyValidationError, PostDislike, PostWriteRequest,
};
pub use self::post_draft::PostDraft;
pub use self::post_form::{PostCreatedCallback, PostForm};
pub use self::post_reactions::PostReactions;
pub use self::session::{PostFeed, SessionStore};
pub use self::submission::{GroupFormPorts, SubmitError, SubmitOutcome, SubmitStep};
pub use self::topic::{Topic, TopicParseError};
pub use self::topic_selection::TopicSelection;
pub use self::user::SessionUser;
pub use self::validation::{FieldError, FieldErrors, FormField, required};
