//! Comment submission form.
//!
//! The modal's visibility and draft live in [`CommentFormState`], driven by
//! [`CommentFormReducer`]. [`CommentForm`] wraps that state for one dish and
//! hands a [`CommentSubmission`] to its caller on a valid submit.

mod intent;
mod reducer;
mod state;
mod validation;

pub use intent::CommentFormIntent;
pub use reducer::CommentFormReducer;
pub use state::CommentFormState;
pub use validation::{
    CommentDraft, CommentSubmission, Field, FieldError, Rule, ValidationErrors, AUTHOR_MAX_LEN,
    AUTHOR_MIN_LEN,
};

use crate::menu::DishId;
use crate::mvi::Reducer;

/// Comment form bound to one dish.
pub struct CommentForm<F>
where
    F: FnMut(CommentSubmission),
{
    dish_id: DishId,
    state: CommentFormState,
    on_submit: F,
}

impl<F> CommentForm<F>
where
    F: FnMut(CommentSubmission),
{
    pub fn new(dish_id: DishId, on_submit: F) -> Self {
        Self {
            dish_id,
            state: CommentFormState::default(),
            on_submit,
        }
    }

    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    pub fn state(&self) -> &CommentFormState {
        &self.state
    }

    /// Apply `intent` to the form.
    ///
    /// A valid `Submit` closes the modal first, then calls `on_submit`
    /// exactly once. A rejected `Submit` returns the draft's errors and
    /// emits nothing.
    pub fn dispatch(&mut self, intent: CommentFormIntent) -> Result<(), ValidationErrors> {
        let outcome = match (&intent, &self.state) {
            (CommentFormIntent::Submit, CommentFormState::Visible { draft, .. }) => {
                Some(draft.validate(self.dish_id))
            }
            _ => None,
        };

        self.state = CommentFormReducer::reduce(std::mem::take(&mut self.state), intent);

        match outcome {
            Some(Ok(submission)) => {
                tracing::debug!(dish_id = self.dish_id, "Comment form submitted");
                (self.on_submit)(submission);
                Ok(())
            }
            Some(Err(errors)) => Err(errors),
            None => Ok(()),
        }
    }
}
