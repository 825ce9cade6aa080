use std::collections::BTreeSet;

use crate::form::validation::{CommentDraft, Field, ValidationErrors};
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CommentFormState {
    #[default]
    Hidden,
    Visible {
        draft: CommentDraft,
        /// Fields whose errors are shown.
        touched: BTreeSet<Field>,
    },
}

impl State for CommentFormState {}

impl CommentFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<&CommentDraft> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    /// Errors on touched fields only. Empty while hidden.
    pub fn visible_errors(&self) -> ValidationErrors {
        match self {
            Self::Visible { draft, touched } => {
                draft.errors().retain_fields(|field| touched.contains(&field))
            }
            Self::Hidden => ValidationErrors::default(),
        }
    }
}
