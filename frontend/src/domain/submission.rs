//! Outcome types shared by the form controllers.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::ports::ApiError;
use super::{Error, FieldErrors, FormEvent, FormStatus, SessionStore, Topic};

/// One backend call in a submit chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    /// `create_group`.
    CreateGroup,
    /// `update_group`.
    UpdateGroup,
    /// `unjoin_topic` for the given topic.
    UnjoinTopic(Topic),
    /// `join_topic` for the given topic.
    JoinTopic(Topic),
    /// Session reload after membership changes.
    RefreshSession,
    /// `create_post`.
    CreatePost,
}

impl fmt::Display for SubmitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateGroup => write!(f, "create group"),
            Self::UpdateGroup => write!(f, "update group"),
            Self::UnjoinTopic(topic) => write!(f, "unjoin topic {topic}"),
            Self::JoinTopic(topic) => write!(f, "join topic {topic}"),
            Self::RefreshSession => write!(f, "refresh session"),
            Self::CreatePost => write!(f, "create post"),
        }
    }
}

/// A submit chain stopped at `step`.
///
/// Calls that completed before `step` are not undone.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{step} failed after {completed_calls} completed calls: {source}")]
pub struct SubmitError {
    /// The call that failed.
    pub step: SubmitStep,
    /// Backend calls that succeeded before the failure.
    pub completed_calls: usize,
    /// Whether repeating the failed call could plausibly succeed.
    pub retryable: bool,
    /// Translated port error.
    #[source]
    pub source: Error,
}

impl SubmitError {
    pub(crate) fn new(step: SubmitStep, completed_calls: usize, source: ApiError) -> Self {
        Self {
            step,
            completed_calls,
            retryable: source.is_retryable(),
            source: source.into(),
        }
    }
}

/// What a call to `submit` did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The form was pristine or busy; nothing happened.
    Ignored,
    /// Field validation failed; no mutation was issued.
    Rejected(FieldErrors),
    /// A backend call failed; the error has already been logged.
    Failed(SubmitError),
    /// Every step completed.
    Succeeded(T),
}

impl<T> SubmitOutcome<T> {
    /// Whether every step completed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Ports needed by the group forms.
pub struct GroupFormPorts<G: ?Sized, U: ?Sized, N: ?Sized> {
    /// Group CRUD and membership.
    pub groups: Arc<G>,
    /// Current-user lookups.
    pub users: Arc<U>,
    /// Post-submit navigation.
    pub navigator: Arc<N>,
    /// Shared session record.
    pub session: SessionStore,
}

impl<G: ?Sized, U: ?Sized, N: ?Sized> Clone for GroupFormPorts<G, U, N> {
    fn clone(&self) -> Self {
        Self {
            groups: Arc::clone(&self.groups),
            users: Arc::clone(&self.users),
            navigator: Arc::clone(&self.navigator),
            session: self.session.clone(),
        }
    }
}

pub(crate) fn advance(status: &mut FormStatus, event: FormEvent) {
    if let Err(err) = status.apply(event) {
        warn!(error = %err, "ignoring form event");
    }
}
