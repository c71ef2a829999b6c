//! Topic tags that groups can join.
//!
//! The backend knows topics by a small numeric identifier while users see a
//! label. [`Topic`] is the single place where the two are tied together.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a label or identifier does not name a topic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicParseError {
    /// The label does not match any topic, ignoring case.
    #[error("unknown topic label: {0}")]
    UnknownLabel(String),
    /// The numeric identifier is outside the known range.
    #[error("unknown topic id: {0}")]
    UnknownId(u8),
}

/// One of the fixed topic tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Topic {
    /// Sport, id `1`.
    Sport,
    /// Entertainment, id `2`.
    Entertainment,
    /// Health, id `3`.
    Health,
    /// Education, id `4`.
    Education,
    /// Family, id `5`.
    Family,
}

impl Topic {
    /// Every topic in checkbox order.
    pub const ALL: [Self; 5] = [
        Self::Sport,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Family,
    ];

    /// Numeric identifier understood by the backend.
    ///
    /// # Examples
    /// ```
    /// use community_frontend::domain::Topic;
    ///
    /// assert_eq!(Topic::Health.id(), 3);
    /// ```
    pub const fn id(self) -> u8 {
        match self {
            Self::Sport => 1,
            Self::Entertainment => 2,
            Self::Health => 3,
            Self::Education => 4,
            Self::Family => 5,
        }
    }

    /// Label shown to users and used in group records.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Family => "Family",
        }
    }

    /// Resolve a backend identifier.
    pub fn from_id(id: u8) -> Result<Self, TopicParseError> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.id() == id)
            .ok_or(TopicParseError::UnknownId(id))
    }

    /// Resolve a label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Result<Self, TopicParseError> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| TopicParseError::UnknownLabel(label.to_owned()))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either a label (`"sport"`) or a numeric id (`"1"`).
impl FromStr for Topic {
    type Err = TopicParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<u8>() {
            Ok(id) => Self::from_id(id),
            Err(_) => Self::from_label(raw),
        }
    }
}
