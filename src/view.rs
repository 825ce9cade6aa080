//! Plain-text presentation of the application state.
//!
//! Each view borrows the state it renders and implements `Display`.

use std::fmt;

use chrono::DateTime;

use crate::comments::Comment;
use crate::form::{CommentFormState, Field};
use crate::menu::DishId;
use crate::root::AppState;

/// `2012-10-16T17:57:28.556Z` -> `Oct 16, 2012`. Unparsable dates are shown as is.
pub fn format_comment_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Featured dish, promotion and leader.
pub struct HomeView<'a>(pub &'a AppState);

impl fmt::Display for HomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if let Some(dish) = state.dishes.iter().find(|d| d.featured) {
            card(f, &dish.name, &dish.label, &dish.description)?;
        }
        if let Some(promo) = state.promotions.iter().find(|p| p.featured) {
            card(f, &promo.name, &promo.label, &promo.description)?;
        }
        if let Some(leader) = state.leaders.iter().find(|l| l.featured) {
            card(f, &leader.name, &leader.designation, &leader.description)?;
        }
        Ok(())
    }
}

fn card(f: &mut fmt::Formatter<'_>, title: &str, subtitle: &str, text: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    if !subtitle.is_empty() {
        writeln!(f, "  {}", subtitle)?;
    }
    writeln!(f, "  {}", text)?;
    writeln!(f)
}

pub struct MenuView<'a>(pub &'a AppState);

impl fmt::Display for MenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Menu")?;
        for dish in self.0.dishes.iter() {
            write!(f, "{:>3}  {:<20} ${}", dish.id, dish.name, dish.price)?;
            if !dish.label.is_empty() {
                write!(f, "  [{}]", dish.label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct AboutView<'a>(pub &'a AppState);

impl fmt::Display for AboutView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Corporate Leadership")?;
        for leader in self.0.leaders.iter() {
            writeln!(f, "{} ({})", leader.name, leader.designation)?;
            writeln!(f, "  {}", leader.description)?;
        }
        Ok(())
    }
}

/// A dish with its comments. Renders nothing for an unknown dish.
pub struct DishDetailView<'a> {
    pub state: &'a AppState,
    pub dish_id: DishId,
}

impl fmt::Display for DishDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(dish) = self.state.dish(self.dish_id) else {
            return Ok(());
        };

        writeln!(f, "Menu / {}", dish.name)?;
        writeln!(f)?;
        writeln!(f, "{}", dish.name)?;
        writeln!(f, "  {}", dish.description)?;
        writeln!(f)?;
        writeln!(f, "Comments")?;

        let slice = &self.state.comments;
        if let Some(message) = &slice.err_message {
            writeln!(f, "  ! {}", message)?;
        }
        for comment in slice.for_dish(dish.id) {
            write_comment(f, comment)?;
        }
        Ok(())
    }
}

fn write_comment(f: &mut fmt::Formatter<'_>, comment: &Comment) -> fmt::Result {
    writeln!(f, "  {}", comment.comment)?;
    writeln!(
        f,
        "  -- {}, {}",
        comment.author,
        format_comment_date(&comment.date)
    )
}

/// The comment modal with the errors of touched fields.
pub struct CommentFormView<'a>(pub &'a CommentFormState);

impl fmt::Display for CommentFormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(draft) = self.0.draft() else {
            return writeln!(f, "[ Submit Comment ]");
        };
        let errors = self.0.visible_errors();

        writeln!(f, "Submit Comment")?;
        for field in Field::ALL {
            let value = match field {
                Field::Rating => draft.rating.map(|r| r.to_string()).unwrap_or_default(),
                Field::Author => draft.author.clone(),
                Field::Comment => draft.comment.clone(),
            };
            writeln!(f, "  {}: {}", field, value)?;
            for rule in errors.for_field(field) {
                writeln!(f, "    ! {}", rule)?;
            }
        }
        Ok(())
    }
}
