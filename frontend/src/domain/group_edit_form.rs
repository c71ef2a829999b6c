//! Controller behind the "edit group" form.

use tracing::{error, info};

use super::group_form::{group_form_inputs, validate_group_draft};
use super::ports::{GroupApi, Navigator, Route, UserApi};
use super::submission::advance;
use super::topic_membership::replace_topics;
use super::{
    FieldErrors, FormEvent, FormStatus, Group, GroupDraft, GroupFormPorts, SubmitError,
    SubmitOutcome, SubmitStep,
};

/// Edits an existing group, pre-filled from its record.
///
/// Submit runs: validation, `update_group`, `unjoin_topic` for every topic
/// of the record being edited, `join_topic` for every selected topic, a
/// session refresh, then navigation. Topics kept across the edit are
/// unjoined and joined again. The title lookup is skipped while the title
/// still matches the record.
pub struct GroupEditForm<G: ?Sized, U: ?Sized, N: ?Sized> {
    ports: GroupFormPorts<G, U, N>,
    original: Group,
    draft: GroupDraft,
    status: FormStatus,
}

impl<G, U, N> GroupEditForm<G, U, N>
where
    G: GroupApi + ?Sized,
    U: UserApi + ?Sized,
    N: Navigator + ?Sized,
{
    /// Form pre-filled from `original`.
    pub fn new(ports: GroupFormPorts<G, U, N>, original: Group) -> Self {
        let draft = GroupDraft::from_group(&original);
        Self {
            ports,
            original,
            draft,
            status: FormStatus::new(),
        }
    }

    /// Record the form was opened with, or the last successfully saved one.
    pub fn original(&self) -> &Group {
        &self.original
    }

    group_form_inputs!();

    /// Run the field validators without submitting.
    pub async fn validate(&self) -> FieldErrors {
        validate_group_draft(
            self.ports.groups.as_ref(),
            &self.draft,
            Some(self.original.title.as_str()),
        )
        .await
    }

    /// Validate and run the update chain.
    ///
    /// On success the saved record becomes the new baseline, so a later
    /// submit unjoins the topics saved now.
    pub async fn submit(&mut self) -> SubmitOutcome<Group> {
        if !self.status.can_submit() {
            return SubmitOutcome::Ignored;
        }

        advance(&mut self.status, FormEvent::Validate);
        let errors = self.validate().await;
        if !errors.is_empty() {
            advance(&mut self.status, FormEvent::Reject);
            return SubmitOutcome::Rejected(errors);
        }

        advance(&mut self.status, FormEvent::Submit);
        match self.update().await {
            Ok(group) => {
                advance(&mut self.status, FormEvent::Succeed);
                self.draft = GroupDraft::from_group(&group);
                self.original = group.clone();
                SubmitOutcome::Succeeded(group)
            }
            Err(err) => {
                error!(
                    group_id = %self.original.id,
                    step = %err.step,
                    completed_calls = err.completed_calls,
                    retryable = err.retryable,
                    error = %err.source,
                    "group update stopped"
                );
                advance(&mut self.status, FormEvent::Fail);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn update(&self) -> Result<Group, SubmitError> {
        let group_id = self.original.id;
        let request = self.draft.to_write_request();
        let updated = self
            .ports
            .groups
            .update_group(group_id, &request)
            .await
            .map_err(|err| SubmitError::new(SubmitStep::UpdateGroup, 0, err))?;
        let mut completed = 1;
        info!(%group_id, title = %updated.title, "group updated");

        replace_topics(
            self.ports.groups.as_ref(),
            group_id,
            &self.original.topics,
            self.draft.topics.as_slice(),
            &mut completed,
        )
        .await?;

        self.ports
            .session
            .refresh(self.ports.users.as_ref())
            .await
            .map_err(|err| SubmitError::new(SubmitStep::RefreshSession, completed, err))?;

        let saved = Group {
            topics: self.draft.topics.as_slice().to_vec(),
            posts: if updated.posts.is_empty() {
                self.original.posts.clone()
            } else {
                updated.posts
            },
            ..updated
        };
        self.ports.navigator.navigate(Route::GroupHome(group_id));
        Ok(saved)
    }
}

#[cfg(test)]
#[path = "group_edit_form_tests.rs"]
mod tests;
