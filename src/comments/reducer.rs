use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::action::Action;
use crate::comments::state::{Comment, CommentsState};
use crate::mvi::Reducer;

/// Reducer for the comments slice.
pub struct CommentsReducer;

impl Reducer for CommentsReducer {
    type State = Arc<CommentsState>;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        Self::reduce_at(state, intent, Utc::now())
    }
}

impl CommentsReducer {
    /// Same as [`Reducer::reduce`] with the insertion time supplied.
    ///
    /// New comments get `id = comments.len()`. That id is only unique while
    /// the slice never removes comments; a delete operation would need a
    /// monotonic counter stored next to the list instead.
    pub fn reduce_at(
        state: Arc<CommentsState>,
        action: Action,
        now: DateTime<Utc>,
    ) -> Arc<CommentsState> {
        match action {
            Action::AddComment(new) => {
                // Clones when another holder (e.g. a subscriber) still sees the old list.
                let mut next = Arc::unwrap_or_clone(state);
                next.comments.push(Comment {
                    id: next.comments.len(),
                    dish_id: new.dish_id,
                    rating: new.rating,
                    author: new.author,
                    comment: new.comment,
                    date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                });
                Arc::new(next)
            }
            Action::AddComments(comments) => Arc::new(CommentsState {
                err_message: None,
                is_loading: false,
                comments,
            }),
            Action::CommentsFailed(message) => Arc::new(CommentsState {
                err_message: Some(message),
                is_loading: false,
                comments: Vec::new(),
            }),
            Action::Init => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::{NewComment, Rating};
    use chrono::TimeZone;

    fn add(author: &str) -> Action {
        Action::AddComment(NewComment {
            dish_id: 1,
            rating: Rating::new(4).unwrap(),
            author: author.into(),
            comment: "ok".into(),
        })
    }

    #[test]
    fn date_is_millisecond_utc() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 1).unwrap();
        let state = CommentsReducer::reduce_at(Arc::default(), add("Ann"), now);
        assert_eq!(state.comments[0].date, "2024-03-09T08:05:01.000Z");
    }

    #[test]
    fn append_keeps_error_message() {
        let state = Arc::new(CommentsState {
            err_message: Some("stale".into()),
            is_loading: false,
            comments: Vec::new(),
        });
        let next = CommentsReducer::reduce(state, add("Ann"));
        assert_eq!(next.err_message.as_deref(), Some("stale"));
        assert_eq!(next.comments.len(), 1);
    }

    #[test]
    fn bulk_replace_clears_loading() {
        let state = Arc::new(CommentsState {
            err_message: None,
            is_loading: true,
            comments: Vec::new(),
        });
        let next = CommentsReducer::reduce(state, Action::AddComments(Vec::new()));
        assert!(!next.is_loading);
    }
}
