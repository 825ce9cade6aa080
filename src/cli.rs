//! Command-line surface of the `confusion` binary.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::comments::Rating;
use crate::config::Config;
use crate::form::{CommentForm, CommentFormIntent};
use crate::menu::DishId;
use crate::root::AppState;
use crate::seed::Seed;
use crate::store::Store;
use crate::view::{AboutView, CommentFormView, DishDetailView, HomeView, MenuView};

#[derive(Debug, Parser)]
#[command(name = "confusion", version, about = "Browse the menu and comment on dishes")]
pub struct Cli {
    /// Seed file (TOML or JSON) to build the initial state from
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Config file (default: ~/.config/confusion/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log reductions at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Featured dish, promotion and leader
    Home,
    /// List all dishes
    Menu,
    /// Corporate leadership
    About,
    /// Show a dish with its comments
    Dish { id: DishId },
    /// Submit a comment for a dish and show the result
    Comment {
        dish_id: DishId,
        #[arg(long, default_value = "1")]
        rating: Rating,
        #[arg(long)]
        author: String,
        #[arg(long)]
        comment: String,
    },
    /// Dump the application state as JSON
    State,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        Ok(config?)
    }

    /// `--seed` wins over the config file; the built-in seed is the fallback.
    pub fn load_seed(&self, config: &Config) -> anyhow::Result<Seed> {
        match self.seed.as_ref().or(config.seed.path.as_ref()) {
            Some(path) => Seed::load_from(path)
                .with_context(|| format!("Failed to load seed from {}", path.display())),
            None => Ok(Seed::builtin()?),
        }
    }
}

/// Build the store and run `command`, returning what should be printed.
pub fn execute(command: Command, initial: AppState) -> anyhow::Result<String> {
    let store = Store::new(initial);
    store.subscribe(|state| {
        tracing::info!(comments = state.comments.comments.len(), "State updated");
    });

    let state = store.state();
    let output = match command {
        Command::Home => HomeView(&state).to_string(),
        Command::Menu => MenuView(&state).to_string(),
        Command::About => AboutView(&state).to_string(),
        Command::Dish { id } => {
            if state.dish(id).is_none() {
                bail!("Dish {} not found", id);
            }
            DishDetailView { state: &state, dish_id: id }.to_string()
        }
        Command::Comment {
            dish_id,
            rating,
            author,
            comment,
        } => {
            if state.dish(dish_id).is_none() {
                bail!("Dish {} not found", dish_id);
            }

            let dispatcher = store.clone();
            let mut form = CommentForm::new(dish_id, move |submission| {
                dispatcher.dispatch(submission.into())
            });
            for intent in [
                CommentFormIntent::Open,
                CommentFormIntent::SetRating(Some(rating)),
                CommentFormIntent::SetAuthor(author),
                CommentFormIntent::SetComment(comment),
            ] {
                form.dispatch(intent)?;
            }
            if let Err(errors) = form.dispatch(CommentFormIntent::Submit) {
                bail!("Comment rejected ({})\n{}", errors, CommentFormView(form.state()));
            }

            let state = store.state();
            DishDetailView {
                state: &state,
                dish_id,
            }
            .to_string()
        }
        Command::State => serde_json::to_string_pretty(&*state)?,
    };
    Ok(output)
}
