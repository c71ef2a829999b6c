//! Controller behind the "create group" form.

use tracing::{error, info};

use super::group_form::{group_form_inputs, validate_group_draft};
use super::ports::{GroupApi, Navigator, Route, UserApi};
use super::submission::advance;
use super::topic_membership::join_topics;
use super::{
    FieldErrors, FormEvent, FormStatus, Group, GroupDraft, GroupFormPorts, SubmitError,
    SubmitOutcome, SubmitStep,
};

/// Collects a new group's fields and topics, then creates it.
///
/// Submit runs: validation, `create_group`, one `join_topic` per selected
/// topic in selection order, a session refresh, then navigation to the new
/// group's home page. A failing step is logged and stops the chain without
/// undoing earlier calls.
pub struct GroupCreateForm<G: ?Sized, U: ?Sized, N: ?Sized> {
    ports: GroupFormPorts<G, U, N>,
    draft: GroupDraft,
    status: FormStatus,
}

impl<G, U, N> GroupCreateForm<G, U, N>
where
    G: GroupApi + ?Sized,
    U: UserApi + ?Sized,
    N: Navigator + ?Sized,
{
    /// Blank form with the placeholder avatar.
    pub fn new(ports: GroupFormPorts<G, U, N>) -> Self {
        Self {
            ports,
            draft: GroupDraft::new(),
            status: FormStatus::new(),
        }
    }

    group_form_inputs!();

    /// Run the field validators without submitting.
    pub async fn validate(&self) -> FieldErrors {
        validate_group_draft(self.ports.groups.as_ref(), &self.draft, None).await
    }

    /// Validate and run the create chain.
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
        match self.create().await {
            Ok(group) => {
                advance(&mut self.status, FormEvent::Succeed);
                self.draft = GroupDraft::new();
                SubmitOutcome::Succeeded(group)
            }
            Err(err) => {
                error!(
                    step = %err.step,
                    completed_calls = err.completed_calls,
                    retryable = err.retryable,
                    error = %err.source,
                    "group creation stopped"
                );
                advance(&mut self.status, FormEvent::Fail);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn create(&self) -> Result<Group, SubmitError> {
        let request = self.draft.to_write_request();
        let group = self
            .ports
            .groups
            .create_group(&request)
            .await
            .map_err(|err| SubmitError::new(SubmitStep::CreateGroup, 0, err))?;
        let mut completed = 1;
        info!(group_id = %group.id, title = %group.title, "group created");

        join_topics(
            self.ports.groups.as_ref(),
            group.id,
            self.draft.topics.as_slice(),
            &mut completed,
        )
        .await?;

        self.ports
            .session
            .refresh(self.ports.users.as_ref())
            .await
            .map_err(|err| SubmitError::new(SubmitStep::RefreshSession, completed, err))?;

        let group = Group {
            topics: self.draft.topics.as_slice().to_vec(),
            ..group
        };
        self.ports.navigator.navigate(Route::GroupHome(group.id));
        Ok(group)
    }
}

#[cfg(test)]
#[path = "group_create_form_tests.rs"]
mod tests;
