//! Static seed data the initial [`AppState`] is built from.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::comments::{Comment, CommentsState};
use crate::menu::{Dish, Leader, Promotion};
use crate::root::AppState;

const BUILTIN_SEED: &str = include_str!("../data/seed.toml");

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML seed '{path}': {source}")]
    TomlError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON seed '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Comment at position {position} has id {id}; ids must equal their position")]
    CommentIdOutOfSequence { position: usize, id: usize },

    #[error("Comment {comment_id} refers to unknown dish {dish_id}")]
    UnknownDish { comment_id: usize, dish_id: u32 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub leaders: Vec<Leader>,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

impl Seed {
    /// The seed compiled into the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        let seed: Seed = toml::from_str(BUILTIN_SEED).map_err(|e| SeedError::TomlError {
            path: PathBuf::from("<builtin>"),
            source: e,
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load a seed file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let seed: Seed = if is_json {
            serde_json::from_str(&content).map_err(|e| SeedError::JsonError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            toml::from_str(&content).map_err(|e| SeedError::TomlError {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        seed.validate()?;
        tracing::info!(
            path = %path.display(),
            dishes = seed.dishes.len(),
            comments = seed.comments.len(),
            "Seed loaded"
        );
        Ok(seed)
    }

    /// Validates the seed.
    ///
    /// Checks:
    /// - Dish, leader and promotion ids are unique
    /// - Comment ids equal their position, so appended ids stay unique
    /// - Every comment refers to an existing dish
    pub fn validate(&self) -> Result<(), SeedError> {
        unique_ids("dish", self.dishes.iter().map(|d| d.id))?;
        unique_ids("leader", self.leaders.iter().map(|l| l.id))?;
        unique_ids("promotion", self.promotions.iter().map(|p| p.id))?;

        let dish_ids: HashSet<u32> = self.dishes.iter().map(|d| d.id).collect();
        for (position, comment) in self.comments.iter().enumerate() {
            if comment.id != position {
                return Err(SeedError::CommentIdOutOfSequence {
                    position,
                    id: comment.id,
                });
            }
            if !dish_ids.contains(&comment.dish_id) {
                return Err(SeedError::UnknownDish {
                    comment_id: comment.id,
                    dish_id: comment.dish_id,
                });
            }
        }

        Ok(())
    }
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

impl From<Seed> for AppState {
    fn from(seed: Seed) -> Self {
        AppState {
            dishes: Arc::new(seed.dishes),
            comments: Arc::new(CommentsState::new(seed.comments)),
            leaders: Arc::new(seed.leaders),
            promotions: Arc::new(seed.promotions),
        }
    }
}
