//! Field rules for the comment form.

use std::fmt;

use thiserror::Error;

use crate::action::Action;
use crate::comments::{NewComment, Rating};
use crate::menu::DishId;

pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Rating,
    Author,
    Comment,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Rating, Field::Author, Field::Comment];

    pub fn label(self) -> &'static str {
        match self {
            Field::Rating => "Rating",
            Field::Author => "Your Name",
            Field::Comment => "Comment",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A field rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("Required"),
            Rule::MinLength(min) => {
                write!(f, "Must be greater than {} characters", min.saturating_sub(1))
            }
            Rule::MaxLength(max) => write!(f, "Must be {} characters or less", max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {rule}")]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

/// Every rule a draft fails, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = Rule> + '_ {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.rule)
    }

    /// Keep only errors on the given fields.
    pub fn retain_fields(mut self, keep: impl Fn(Field) -> bool) -> Self {
        self.errors.retain(|e| keep(e.field));
        self
    }

    fn push(&mut self, field: Field, rule: Rule) {
        self.errors.push(FieldError { field, rule });
    }
}

/// User input collected by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: Option<Rating>,
    pub author: String,
    pub comment: String,
}

impl Default for CommentDraft {
    /// Rating preselects the first option.
    fn default() -> Self {
        Self {
            rating: Some(Rating::MIN),
            author: String::new(),
            comment: String::new(),
        }
    }
}

impl CommentDraft {
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.rating.is_none() {
            errors.push(Field::Rating, Rule::Required);
        }

        let author_len = self.author.chars().count();
        if author_len == 0 {
            errors.push(Field::Author, Rule::Required);
        } else if author_len < AUTHOR_MIN_LEN {
            errors.push(Field::Author, Rule::MinLength(AUTHOR_MIN_LEN));
        } else if author_len > AUTHOR_MAX_LEN {
            errors.push(Field::Author, Rule::MaxLength(AUTHOR_MAX_LEN));
        }

        if self.comment.is_empty() {
            errors.push(Field::Comment, Rule::Required);
        }

        errors
    }

    pub fn validate(&self, dish_id: DishId) -> Result<CommentSubmission, ValidationErrors> {
        let errors = self.errors();
        match self.rating {
            Some(rating) if errors.is_empty() => Ok(CommentSubmission {
                dish_id,
                rating,
                author: self.author.clone(),
                comment: self.comment.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// What a confirmed form submit hands to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubmission {
    pub dish_id: DishId,
    pub rating: Rating,
    pub author: String,
    pub comment: String,
}

impl From<CommentSubmission> for Action {
    fn from(s: CommentSubmission) -> Self {
        Action::AddComment(NewComment {
            dish_id: s.dish_id,
            rating: s.rating,
            author: s.author,
            comment: s.comment,
        })
    }
}
