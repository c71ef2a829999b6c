//! Ordered set of topics picked through the group form checkboxes.

use tracing::warn;

use super::Topic;

/// Topics currently ticked in a group draft.
///
/// Order follows the order in which boxes were ticked; membership calls are
/// issued in that order. A topic appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSelection(Vec<Topic>);

impl TopicSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from topics, dropping repeats.
    pub fn from_topics(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut selection = Self::new();
        for topic in topics {
            if !selection.contains(topic) {
                selection.0.push(topic);
            }
        }
        selection
    }

    /// Build a selection from record labels, skipping labels that name no
    /// topic.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_topics(labels.into_iter().filter_map(|label| {
            Topic::from_label(label)
                .inspect_err(|err| warn!(error = %err, "skipping unknown topic label"))
                .ok()
        }))
    }

    /// Flip one checkbox. Returns `true` when the topic is now selected.
    pub fn toggle(&mut self, topic: Topic) -> bool {
        if let Some(index) = self.0.iter().position(|selected| *selected == topic) {
            self.0.remove(index);
            false
        } else {
            self.0.push(topic);
            true
        }
    }

    /// Whether the topic's checkbox is ticked.
    pub fn contains(&self, topic: Topic) -> bool {
        self.0.contains(&topic)
    }

    /// Selected topics in selection order.
    pub fn as_slice(&self) -> &[Topic] {
        &self.0
    }

    /// Iterate selected topics in selection order.
    pub fn iter(&self) -> impl Iterator<Item = Topic> + '_ {
        self.0.iter().copied()
    }

    /// Number of selected topics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
