//! Recording backend double shared by the form tests.
//!
//! One value implements every port and logs calls into a single ordered
//! list, so tests can assert ordering across ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ports::{ApiError, GroupApi, Navigator, Route, UserApi};
use super::{
    Group, GroupFormPorts, GroupId, GroupWriteRequest, SessionStore, SessionUser, Topic, UserId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    TitleExists(String),
    CreateGroup(String),
    UpdateGroup(GroupId, String),
    Join(GroupId, Topic),
    Unjoin(GroupId, Topic),
    FetchUser,
    Navigate(String),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    taken_titles: Vec<String>,
    fail_on: Option<Call>,
}

#[derive(Clone)]
pub(crate) struct RecordingBackend {
    group_id: GroupId,
    state: Arc<Mutex<State>>,
}

impl RecordingBackend {
    pub(crate) fn new(group_id: i64) -> Self {
        Self {
            group_id: GroupId::new(group_id),
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub(crate) fn with_taken_title(self, title: &str) -> Self {
        self.lock().taken_titles.push(title.to_owned());
        self
    }

    pub(crate) fn failing_on(self, call: Call) -> Self {
        self.lock().fail_on = Some(call);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub(crate) fn ports(&self, session: SessionStore) -> GroupFormPorts<Self, Self, Self> {
        GroupFormPorts {
            groups: Arc::new(self.clone()),
            users: Arc::new(self.clone()),
            navigator: Arc::new(self.clone()),
            session,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("recording backend lock")
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.lock();
        let fails = state.fail_on.as_ref() == Some(&call);
        state.calls.push(call);
        if fails {
            Err(ApiError::transport("injected failure"))
        } else {
            Ok(())
        }
    }

    fn group(&self, id: GroupId, request: &GroupWriteRequest) -> Group {
        Group {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            rules: request.rules.clone(),
            avatar: request.avatar.clone(),
            topics: Vec::new(),
            posts: Vec::new(),
        }
    }
}

pub(crate) fn session_user() -> SessionUser {
    SessionUser {
        id: UserId::new(1),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        groups: Vec::new(),
    }
}

#[async_trait]
impl GroupApi for RecordingBackend {
    async fn create_group(&self, request: &GroupWriteRequest) -> Result<Group, ApiError> {
        self.record(Call::CreateGroup(request.title.clone()))?;
        Ok(self.group(self.group_id, request))
    }

    async fn fetch_group(&self, group_id: GroupId) -> Result<Group, ApiError> {
        Err(ApiError::not_found(format!("group {group_id}")))
    }

    async fn update_group(
        &self,
        group_id: GroupId,
        request: &GroupWriteRequest,
    ) -> Result<Group, ApiError> {
        self.record(Call::UpdateGroup(group_id, request.title.clone()))?;
        Ok(self.group(group_id, request))
    }

    async fn title_exists(&self, title: &str) -> Result<bool, ApiError> {
        self.record(Call::TitleExists(title.to_owned()))?;
        Ok(self.lock().taken_titles.iter().any(|taken| taken == title))
    }

    async fn join_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError> {
        self.record(Call::Join(group_id, topic))
    }

    async fn unjoin_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError> {
        self.record(Call::Unjoin(group_id, topic))
    }
}

#[async_trait]
impl UserApi for RecordingBackend {
    async fn fetch_current_user(&self) -> Result<SessionUser, ApiError> {
        self.record(Call::FetchUser)?;
        Ok(session_user())
    }
}

impl Navigator for RecordingBackend {
    fn navigate(&self, route: Route) {
        self.lock().calls.push(Call::Navigate(route.path()));
    }
}
