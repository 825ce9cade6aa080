use crate::comments::Rating;
use crate::form::validation::Field;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CommentFormIntent {
    /// The "Submit Comment" button or the modal's close control.
    Toggle,
    Open,
    Close,
    /// `None` when the selection is cleared.
    SetRating(Option<Rating>),
    SetAuthor(String),
    SetComment(String),
    /// Field lost focus; its errors become visible.
    Blur(Field),
    /// Valid draft closes the modal. Invalid draft stays open with every field touched.
    Submit,
}

impl Intent for CommentFormIntent {}
