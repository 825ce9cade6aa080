use std::collections::BTreeSet;

use crate::form::intent::CommentFormIntent;
use crate::form::state::CommentFormState;
use crate::form::validation::{CommentDraft, Field};
use crate::mvi::Reducer;

pub struct CommentFormReducer;

impl Reducer for CommentFormReducer {
    type State = CommentFormState;
    type Intent = CommentFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentFormIntent::Toggle => match state {
                CommentFormState::Hidden => open(),
                CommentFormState::Visible { .. } => CommentFormState::Hidden,
            },
            CommentFormIntent::Open => match state {
                CommentFormState::Hidden => open(),
                visible => visible,
            },
            // Closing drops the draft, like unmounting the modal body.
            CommentFormIntent::Close => CommentFormState::Hidden,
            CommentFormIntent::SetRating(rating) => edit(state, |draft| draft.rating = rating),
            CommentFormIntent::SetAuthor(author) => edit(state, |draft| draft.author = author),
            CommentFormIntent::SetComment(comment) => {
                edit(state, |draft| draft.comment = comment)
            }
            CommentFormIntent::Blur(field) => match state {
                CommentFormState::Visible { draft, mut touched } => {
                    touched.insert(field);
                    CommentFormState::Visible { draft, touched }
                }
                other => other,
            },
            CommentFormIntent::Submit => match state {
                CommentFormState::Visible { draft, .. } if draft.errors().is_empty() => {
                    CommentFormState::Hidden
                }
                CommentFormState::Visible { draft, .. } => CommentFormState::Visible {
                    draft,
                    touched: Field::ALL.into_iter().collect(),
                },
                other => other,
            },
        }
    }
}

fn open() -> CommentFormState {
    CommentFormState::Visible {
        draft: CommentDraft::default(),
        touched: BTreeSet::new(),
    }
}

fn edit(state: CommentFormState, apply: impl FnOnce(&mut CommentDraft)) -> CommentFormState {
    match state {
        CommentFormState::Visible { mut draft, touched } => {
            apply(&mut draft);
            CommentFormState::Visible { draft, touched }
        }
        other => other,
    }
}
