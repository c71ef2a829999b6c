//! Numeric backend identifiers.
//!
//! The backend keys every record with a 64-bit integer. Each record kind
//! gets its own newtype so a post id can never be passed where a group id is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend identifier.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the raw backend identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a group.
    GroupId
);
numeric_id!(
    /// Identifier of a post inside a group.
    PostId
);
numeric_id!(
    /// Identifier of a dislike reaction.
    DislikeId
);
numeric_id!(
    /// Identifier of a user account.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_bare_integer() {
        let value = serde_json::to_value(GroupId::new(42)).expect("id serialises");
        assert_eq!(value, serde_json::json!(42));
        let back: PostId = serde_json::from_value(serde_json::json!(7)).expect("id decodes");
        assert_eq!(back.get(), 7);
    }
}
