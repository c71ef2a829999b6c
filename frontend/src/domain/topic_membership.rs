//! Topic membership calls issued after a group is written.
//!
//! Calls run one at a time in order. The first failure stops the loop and
//! reports how many calls had already succeeded; nothing is rolled back.

use tracing::debug;

use super::ports::GroupApi;
use super::{GroupId, SubmitError, SubmitStep, Topic};

/// Join every topic in order.
///
/// `completed` counts calls made earlier in the same submit chain and is
/// advanced for each successful call.
///
/// # Errors
///
/// Returns a [`SubmitError`] naming the first topic whose call failed.
pub async fn join_topics<G>(
    groups: &G,
    group_id: GroupId,
    topics: &[Topic],
    completed: &mut usize,
) -> Result<(), SubmitError>
where
    G: GroupApi + ?Sized,
{
    for &topic in topics {
        groups
            .join_topic(group_id, topic)
            .await
            .map_err(|err| SubmitError::new(SubmitStep::JoinTopic(topic), *completed, err))?;
        *completed += 1;
        debug!(%group_id, %topic, "topic joined");
    }
    Ok(())
}

/// Unjoin every topic in order.
///
/// # Errors
///
/// Returns a [`SubmitError`] naming the first topic whose call failed.
pub async fn unjoin_topics<G>(
    groups: &G,
    group_id: GroupId,
    topics: &[Topic],
    completed: &mut usize,
) -> Result<(), SubmitError>
where
    G: GroupApi + ?Sized,
{
    for &topic in topics {
        groups
            .unjoin_topic(group_id, topic)
            .await
            .map_err(|err| SubmitError::new(SubmitStep::UnjoinTopic(topic), *completed, err))?;
        *completed += 1;
        debug!(%group_id, %topic, "topic unjoined");
    }
    Ok(())
}

/// Replace a group's topics: unjoin all of `original`, then join all of
/// `selected`.
///
/// Topics present in both lists are unjoined and joined again.
///
/// # Errors
///
/// Returns the first failing call.
pub async fn replace_topics<G>(
    groups: &G,
    group_id: GroupId,
    original: &[Topic],
    selected: &[Topic],
    completed: &mut usize,
) -> Result<(), SubmitError>
where
    G: GroupApi + ?Sized,
{
    unjoin_topics(groups, group_id, original, completed).await?;
    join_topics(groups, group_id, selected, completed).await
}
