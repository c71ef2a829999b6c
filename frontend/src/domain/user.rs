//! Session user record.

use serde::Serialize;

use super::{Group, UserId};

/// Aggregate record of the authenticated user.
///
/// Refreshed from the backend as a whole after any mutation that could
/// change it; never patched locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Groups the user belongs to or owns.
    pub groups: Vec<Group>,
}
