mod common;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use confusion::action::Action;
use confusion::comments::{CommentsReducer, CommentsState};
use confusion::mvi::Reducer;

use common::{add_comment, comment, comments_state};

fn three_comments() -> Arc<CommentsState> {
    comments_state(vec![
        comment(0, 0, "John"),
        comment(1, 0, "Paul"),
        comment(2, 1, "Ringo"),
    ])
}

#[test]
fn init_returns_same_state() {
    let state = three_comments();
    let next = CommentsReducer::reduce(Arc::clone(&state), Action::Init);
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn add_comment_appends_with_length_id() {
    let state = three_comments();
    let started = Utc::now();

    let next = CommentsReducer::reduce(
        Arc::clone(&state),
        add_comment(1, 5, "George", "Lovely"),
    );

    assert_eq!(next.comments.len(), 4);
    let added = &next.comments[3];
    assert_eq!(added.id, 3);
    assert_eq!(added.dish_id, 1);
    assert_eq!(added.rating.get(), 5);
    assert_eq!(added.author, "George");
    assert_eq!(added.comment, "Lovely");

    let date: DateTime<Utc> = DateTime::parse_from_rfc3339(&added.date)
        .expect("ISO-8601 date")
        .with_timezone(&Utc);
    // The stored date has millisecond precision.
    assert!(date.timestamp_millis() >= started.timestamp_millis());

    assert_eq!(&next.comments[..3], &state.comments[..]);
}

#[test]
fn add_comment_does_not_touch_previous_state() {
    let state = three_comments();
    let snapshot = (*state).clone();

    let _next = CommentsReducer::reduce(Arc::clone(&state), add_comment(0, 3, "Bob", "OK"));

    assert_eq!(*state, snapshot);
    assert_eq!(state.comments.len(), 3);
}

#[test]
fn add_comments_replaces_and_clears_error() {
    let state = Arc::new(CommentsState {
        err_message: Some("offline".into()),
        is_loading: true,
        comments: vec![comment(0, 0, "Old")],
    });
    let payload = vec![comment(0, 2, "New A"), comment(1, 3, "New B")];

    let next = CommentsReducer::reduce(state, Action::AddComments(payload.clone()));

    assert_eq!(next.comments, payload);
    assert!(next.err_message.is_none());
    assert!(!next.is_loading);
}

#[test]
fn add_comments_is_not_cumulative() {
    let payload = vec![comment(0, 0, "A"), comment(1, 0, "B")];

    let once = CommentsReducer::reduce(three_comments(), Action::AddComments(payload.clone()));
    let twice = CommentsReducer::reduce(once, Action::AddComments(payload.clone()));

    assert_eq!(twice.comments, payload);
}

#[test]
fn comments_failed_discards_comments() {
    let next = CommentsReducer::reduce(
        three_comments(),
        Action::CommentsFailed("network down".into()),
    );

    assert!(next.comments.is_empty());
    assert_eq!(next.err_message.as_deref(), Some("network down"));
    assert!(!next.is_loading);
}

#[test]
fn append_after_failure_starts_ids_at_zero() {
    let failed = CommentsReducer::reduce(three_comments(), Action::CommentsFailed("x".into()));
    let next = CommentsReducer::reduce(failed, add_comment(0, 4, "Ann", "Back"));

    assert_eq!(next.comments.len(), 1);
    assert_eq!(next.comments[0].id, 0);
    assert_eq!(next.err_message.as_deref(), Some("x"));
}

#[test]
fn ids_increase_across_appends() {
    let mut state = Arc::new(CommentsState::default());
    for i in 0..5 {
        state = CommentsReducer::reduce(state, add_comment(0, 3, "Ann", &format!("#{i}")));
    }
    let ids: Vec<usize> = state.comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}
