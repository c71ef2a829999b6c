//! Pieces shared by the group create and edit forms.

use tracing::warn;

use super::ports::GroupApi;
use super::validation::required;
use super::{FieldError, FieldErrors, FormField, GroupDraft};

/// Validate a group draft.
///
/// Title: required, then unique. The uniqueness lookup is skipped when the
/// title is blank or equals `original_title`. A failed lookup is logged and
/// the title is accepted. Description: required.
pub async fn validate_group_draft<G>(
    groups: &G,
    draft: &GroupDraft,
    original_title: Option<&str>,
) -> FieldErrors
where
    G: GroupApi + ?Sized,
{
    let mut errors = FieldErrors::new();

    if let Some(error) = required(&draft.title) {
        errors.record(FormField::Title, error);
    } else if original_title != Some(draft.title.as_str()) {
        match groups.title_exists(&draft.title).await {
            Ok(true) => errors.record(FormField::Title, FieldError::TitleTaken),
            Ok(false) => {}
            Err(err) => warn!(error = %err, title = %draft.title, "title lookup failed"),
        }
    }

    if let Some(error) = required(&draft.description) {
        errors.record(FormField::Description, error);
    }

    errors
}

/// Field setters shared by both group forms.
///
/// Expands inside an `impl` block of a type with `draft: GroupDraft` and
/// `status: FormStatus` fields.
macro_rules! group_form_inputs {
    () => {
        /// Current draft values.
        pub fn draft(&self) -> &$crate::domain::GroupDraft {
            &self.draft
        }

        /// Current submit status.
        pub fn status(&self) -> $crate::domain::FormStatus {
            self.status
        }

        /// Type into the title input.
        pub fn set_title(&mut self, title: impl Into<String>) {
            let title = title.into();
            self.edit(|draft| draft.title = title);
        }

        /// Type into the description input.
        pub fn set_description(&mut self, description: impl Into<String>) {
            let description = description.into();
            self.edit(|draft| draft.description = description);
        }

        /// Type into the rules input.
        pub fn set_rules(&mut self, rules: impl Into<String>) {
            let rules = rules.into();
            self.edit(|draft| draft.rules = rules);
        }

        /// Accept the URL produced by the image uploader.
        pub fn set_avatar(&mut self, url: impl Into<String>) {
            let url = url.into();
            self.edit(|draft| draft.avatar = url);
        }

        /// Flip a topic checkbox. Returns `true` when it is now ticked.
        pub fn toggle_topic(&mut self, topic: $crate::domain::Topic) -> bool {
            let mut selected = false;
            self.edit(|draft| selected = draft.topics.toggle(topic));
            selected
        }

        fn edit(&mut self, apply: impl FnOnce(&mut $crate::domain::GroupDraft)) {
            apply(&mut self.draft);
            $crate::domain::submission::advance(
                &mut self.status,
                $crate::domain::FormEvent::Edit,
            );
        }
    };
}

pub(crate) use group_form_inputs;
