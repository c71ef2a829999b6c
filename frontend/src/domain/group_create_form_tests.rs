//! Tests for the create-group form.

use rstest::rstest;

use super::*;
use crate::domain::test_doubles::{Call, RecordingBackend};
use crate::domain::{
    DEFAULT_AVATAR_URL, FieldError, FormField, FormPhase, GroupId, SessionStore, Topic,
};

fn filled_form(
    backend: &RecordingBackend,
    session: SessionStore,
    topics: &[Topic],
) -> GroupCreateForm<RecordingBackend, RecordingBackend, RecordingBackend> {
    let mut form = GroupCreateForm::new(backend.ports(session));
    form.set_title("Readers");
    form.set_description("A club for people who read");
    for &topic in topics {
        form.toggle_topic(topic);
    }
    form
}

#[tokio::test]
async fn readers_scenario_creates_joins_refreshes_and_navigates() {
    let backend = RecordingBackend::new(17);
    let session = SessionStore::new();
    let mut form = filled_form(&backend, session.clone(), &[Topic::Sport, Topic::Health]);

    let outcome = form.submit().await;

    let group = match outcome {
        SubmitOutcome::Succeeded(group) => group,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(group.id, GroupId::new(17));
    assert_eq!(group.topics, vec![Topic::Sport, Topic::Health]);
    assert_eq!(
        backend.calls(),
        vec![
            Call::TitleExists("Readers".to_owned()),
            Call::CreateGroup("Readers".to_owned()),
            Call::Join(GroupId::new(17), Topic::Sport),
            Call::Join(GroupId::new(17), Topic::Health),
            Call::FetchUser,
            Call::Navigate("/groups/17/home".to_owned()),
        ]
    );
    assert!(session.current().is_some());
}

#[rstest]
#[case::none(&[])]
#[case::one(&[Topic::Family])]
#[case::all(&Topic::ALL)]
#[tokio::test]
async fn issues_one_join_per_selected_topic_in_order(#[case] topics: &[Topic]) {
    let backend = RecordingBackend::new(3);
    let mut form = filled_form(&backend, SessionStore::new(), topics);

    assert!(form.submit().await.is_success());

    let creates = backend
        .calls()
        .iter()
        .filter(|call| matches!(call, Call::CreateGroup(_)))
        .count();
    let joins: Vec<Topic> = backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Join(_, topic) => Some(topic),
            _ => None,
        })
        .collect();
    assert_eq!(creates, 1);
    assert_eq!(joins, topics.to_vec());
}

#[tokio::test]
async fn success_resets_draft_and_status() {
    let backend = RecordingBackend::new(3);
    let mut form = filled_form(&backend, SessionStore::new(), &[Topic::Sport]);

    assert!(form.submit().await.is_success());

    assert_eq!(form.draft().title, "");
    assert_eq!(form.draft().avatar, DEFAULT_AVATAR_URL);
    assert!(form.draft().topics.is_empty());
    assert!(form.status().is_pristine());
    assert!(form.status().submit_succeeded());
}

#[tokio::test]
async fn taken_title_is_rejected_before_any_mutation() {
    let backend = RecordingBackend::new(3).with_taken_title("Readers");
    let mut form = filled_form(&backend, SessionStore::new(), &[Topic::Sport]);

    let outcome = form.submit().await;

    let errors = match outcome {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("expected rejection, got {other:?}"),
    };
    assert_eq!(errors.get(FormField::Title), Some(FieldError::TitleTaken));
    assert_eq!(backend.calls(), vec![Call::TitleExists("Readers".to_owned())]);
    assert_eq!(form.status().phase(), FormPhase::Editing);
}

#[tokio::test]
async fn missing_description_is_rejected_without_calls_beyond_lookup() {
    let backend = RecordingBackend::new(3);
    let mut form = GroupCreateForm::new(backend.ports(SessionStore::new()));
    form.set_title("Readers");

    let outcome = form.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors)
        if errors.get(FormField::Description) == Some(FieldError::Required)));
    assert!(!backend.calls().iter().any(|call| matches!(call, Call::CreateGroup(_))));
}

#[tokio::test]
async fn failed_join_stops_chain_and_keeps_draft() {
    let backend =
        RecordingBackend::new(8).failing_on(Call::Join(GroupId::new(8), Topic::Health));
    let session = SessionStore::new();
    let mut form = filled_form(
        &backend,
        session.clone(),
        &[Topic::Sport, Topic::Health, Topic::Family],
    );

    let outcome = form.submit().await;

    let err = match outcome {
        SubmitOutcome::Failed(err) => err,
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(err.step, SubmitStep::JoinTopic(Topic::Health));
    assert_eq!(err.completed_calls, 2);
    assert_eq!(
        backend.calls().last(),
        Some(&Call::Join(GroupId::new(8), Topic::Health))
    );
    assert!(session.current().is_none());
    assert_eq!(form.draft().title, "Readers");
    assert!(form.status().can_submit());
}

#[tokio::test]
async fn failed_session_refresh_skips_navigation_and_keeps_draft() {
    let backend = RecordingBackend::new(12).failing_on(Call::FetchUser);
    let session = SessionStore::new();
    let mut form = filled_form(&backend, session.clone(), &[Topic::Sport, Topic::Health]);

    let outcome = form.submit().await;

    let err = match outcome {
        SubmitOutcome::Failed(err) => err,
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(err.step, SubmitStep::RefreshSession);
    assert_eq!(err.completed_calls, 3);
    assert!(err.retryable);
    assert_eq!(backend.calls().last(), Some(&Call::FetchUser));
    assert!(
        !backend
            .calls()
            .iter()
            .any(|call| matches!(call, Call::Navigate(_)))
    );
    assert!(session.current().is_none());
    assert_eq!(form.draft().title, "Readers");
    assert_eq!(form.draft().topics.as_slice(), &[Topic::Sport, Topic::Health]);
    assert!(form.status().can_submit());
}

#[tokio::test]
async fn pristine_form_ignores_submit() {
    let backend = RecordingBackend::new(3);
    let mut form = GroupCreateForm::new(backend.ports(SessionStore::new()));

    assert_eq!(form.submit().await, SubmitOutcome::Ignored);
    assert!(backend.calls().is_empty());
}
