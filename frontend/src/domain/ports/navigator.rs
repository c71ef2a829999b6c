//! Driven port for moving the view to another page.

use std::fmt;

use crate::domain::GroupId;

/// Pages a form can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A group's landing page.
    GroupHome(GroupId),
}

impl Route {
    /// Path understood by the router.
    ///
    /// # Examples
    /// ```
    /// use community_frontend::domain::GroupId;
    /// use community_frontend::domain::ports::Route;
    ///
    /// assert_eq!(Route::GroupHome(GroupId::new(9)).path(), "/groups/9/home");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Self::GroupHome(id) => format!("/groups/{id}/home"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Port for navigation after a successful submit.
pub trait Navigator: Send + Sync {
    /// Show `route`.
    fn navigate(&self, route: Route);
}
