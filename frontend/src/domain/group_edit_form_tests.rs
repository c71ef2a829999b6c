//! Tests for the edit-group form.

use rstest::rstest;

use super::*;
use crate::domain::test_doubles::{Call, RecordingBackend};
use crate::domain::{GroupId, SessionStore, Topic};

fn group(topics: &[Topic]) -> Group {
    Group {
        id: GroupId::new(21),
        title: "Readers".to_owned(),
        description: "A club for people who read".to_owned(),
        rules: None,
        avatar: "https://img.example/books.png".to_owned(),
        topics: topics.to_vec(),
        posts: Vec::new(),
    }
}

type Form = GroupEditForm<RecordingBackend, RecordingBackend, RecordingBackend>;

fn form(backend: &RecordingBackend, original: &[Topic]) -> Form {
    GroupEditForm::new(backend.ports(SessionStore::new()), group(original))
}

#[test]
fn draft_starts_from_record() {
    let backend = RecordingBackend::new(21);
    let form = form(&backend, &[Topic::Sport, Topic::Family]);
    assert_eq!(form.draft().title, "Readers");
    assert!(form.draft().topics.contains(Topic::Family));
    assert!(!form.status().can_submit());
}

#[tokio::test]
async fn sport_family_to_family_education_unjoins_all_then_rejoins() {
    let backend = RecordingBackend::new(21);
    let mut form = form(&backend, &[Topic::Sport, Topic::Family]);
    form.toggle_topic(Topic::Sport);
    form.toggle_topic(Topic::Education);

    assert!(form.submit().await.is_success());

    let id = GroupId::new(21);
    assert_eq!(
        backend.calls(),
        vec![
            Call::UpdateGroup(id, "Readers".to_owned()),
            Call::Unjoin(id, Topic::Sport),
            Call::Unjoin(id, Topic::Family),
            Call::Join(id, Topic::Family),
            Call::Join(id, Topic::Education),
            Call::FetchUser,
            Call::Navigate("/groups/21/home".to_owned()),
        ]
    );
}

#[rstest]
#[case(&[], &[Topic::Health])]
#[case(&[Topic::Sport], &[])]
#[case(&[Topic::Sport, Topic::Health], &[Topic::Sport, Topic::Health])]
#[case(&Topic::ALL, &[Topic::Education])]
#[tokio::test]
async fn call_counts_follow_original_and_selection(
    #[case] original: &[Topic],
    #[case] selected: &[Topic],
) {
    let backend = RecordingBackend::new(21);
    let mut form = form(&backend, original);
    form.set_description("Reworded");
    for &topic in original {
        form.toggle_topic(topic);
    }
    for &topic in selected {
        form.toggle_topic(topic);
    }

    assert!(form.submit().await.is_success());

    let calls = backend.calls();
    let unjoins = calls.iter().filter(|c| matches!(c, Call::Unjoin(..))).count();
    let joins = calls.iter().filter(|c| matches!(c, Call::Join(..))).count();
    assert_eq!(unjoins, original.len());
    assert_eq!(joins, selected.len());
}

#[tokio::test]
async fn unchanged_title_skips_uniqueness_lookup() {
    let backend = RecordingBackend::new(21).with_taken_title("Readers");
    let mut form = form(&backend, &[]);
    form.set_description("New description");

    assert!(form.submit().await.is_success());
    assert!(!backend
        .calls()
        .iter()
        .any(|call| matches!(call, Call::TitleExists(_))));
}

#[tokio::test]
async fn changed_title_is_checked_and_may_be_rejected() {
    let backend = RecordingBackend::new(21).with_taken_title("Writers");
    let mut form = form(&backend, &[Topic::Sport]);
    form.set_title("Writers");

    let outcome = form.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(backend.calls(), vec![Call::TitleExists("Writers".to_owned())]);
}

#[tokio::test]
async fn saved_record_becomes_new_baseline() {
    let backend = RecordingBackend::new(21);
    let mut form = form(&backend, &[Topic::Sport]);
    form.toggle_topic(Topic::Health);
    assert!(form.submit().await.is_success());
    assert_eq!(form.original().topics, vec![Topic::Sport, Topic::Health]);

    backend.clear_calls();
    form.toggle_topic(Topic::Sport);
    assert!(form.submit().await.is_success());

    let unjoined: Vec<Topic> = backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Unjoin(_, topic) => Some(topic),
            _ => None,
        })
        .collect();
    assert_eq!(unjoined, vec![Topic::Sport, Topic::Health]);
}

#[tokio::test]
async fn failed_unjoin_leaves_baseline_untouched() {
    let id = GroupId::new(21);
    let backend = RecordingBackend::new(21).failing_on(Call::Unjoin(id, Topic::Family));
    let mut form = form(&backend, &[Topic::Sport, Topic::Family]);
    form.toggle_topic(Topic::Health);

    let outcome = form.submit().await;

    let err = match outcome {
        SubmitOutcome::Failed(err) => err,
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(err.step, SubmitStep::UnjoinTopic(Topic::Family));
    assert_eq!(err.completed_calls, 2);
    assert_eq!(form.original().topics, vec![Topic::Sport, Topic::Family]);
    assert!(!backend.calls().contains(&Call::FetchUser));
}
