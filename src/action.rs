//! Application-wide action vocabulary.
//!
//! Every slice reducer sees every action and ignores the ones it does not
//! handle, so the set is closed and each variant carries its own payload.

use serde::{Deserialize, Serialize};

use crate::comments::{Comment, NewComment};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Dispatched once by the store when it is created. No slice handles it.
    Init,
    /// Append a user comment. `id` and `date` are assigned by the reducer.
    AddComment(NewComment),
    /// Replace the comment list wholesale (comments (re)loaded).
    AddComments(Vec<Comment>),
    /// Loading comments failed with a human-readable message.
    CommentsFailed(String),
}

impl Intent for Action {}

impl Action {
    /// Stable tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Init => "INIT",
            Action::AddComment(_) => "ADD_COMMENT",
            Action::AddComments(_) => "ADD_COMMENTS",
            Action::CommentsFailed(_) => "COMMENTS_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::Rating;

    #[test]
    fn kind_matches_serialized_tag() {
        let action = Action::AddComment(NewComment {
            dish_id: 0,
            rating: Rating::new(4).unwrap(),
            author: "Ann".into(),
            comment: "Nice".into(),
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.kind());
        assert_eq!(json["payload"]["author"], "Ann");
    }

    #[test]
    fn failure_payload_is_plain_message() {
        let json = serde_json::to_value(Action::CommentsFailed("boom".into())).unwrap();
        assert_eq!(json["type"], "COMMENTS_FAILED");
        assert_eq!(json["payload"], "boom");
    }
}
