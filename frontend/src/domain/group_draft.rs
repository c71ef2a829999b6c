//! In-progress group form values.

use super::{DEFAULT_AVATAR_URL, Group, GroupWriteRequest, TopicSelection};

/// Client-only values of a group form before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Rules input; blank means no rules.
    pub rules: String,
    /// Avatar URL handed over by the image uploader.
    pub avatar: String,
    /// Ticked topic checkboxes.
    pub topics: TopicSelection,
}

impl Default for GroupDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            rules: String::new(),
            avatar: DEFAULT_AVATAR_URL.to_owned(),
            topics: TopicSelection::new(),
        }
    }
}

impl GroupDraft {
    /// Blank draft with the placeholder avatar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing group for editing.
    pub fn from_group(group: &Group) -> Self {
        Self {
            title: group.title.clone(),
            description: group.description.clone(),
            rules: group.rules.clone().unwrap_or_default(),
            avatar: group.avatar.clone(),
            topics: TopicSelection::from_topics(group.topics.iter().copied()),
        }
    }

    /// Field values sent to the backend.
    pub fn to_write_request(&self) -> GroupWriteRequest {
        let rules = (!self.rules.trim().is_empty()).then(|| self.rules.clone());
        GroupWriteRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            rules,
            avatar: self.avatar.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupId, Topic};

    #[test]
    fn blank_rules_are_omitted() {
        let draft = GroupDraft {
            title: "Readers".to_owned(),
            description: "Books".to_owned(),
            rules: "  ".to_owned(),
            ..GroupDraft::new()
        };
        let request = draft.to_write_request();
        assert_eq!(request.rules, None);
        assert_eq!(request.avatar, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn edit_draft_copies_record_fields() {
        let group = Group {
            id: GroupId::new(3),
            title: "Runners".to_owned(),
            description: "Morning runs".to_owned(),
            rules: Some("Be kind".to_owned()),
            avatar: "https://img.example/run.png".to_owned(),
            topics: vec![Topic::Sport, Topic::Health],
            posts: Vec::new(),
        };
        let draft = GroupDraft::from_group(&group);
        assert_eq!(draft.rules, "Be kind");
        assert_eq!(draft.topics.as_slice(), &[Topic::Sport, Topic::Health]);
        assert_eq!(draft.to_write_request().rules.as_deref(), Some("Be kind"));
    }
}
