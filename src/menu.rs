//! Static menu catalogue: dishes, leaders and promotions.
//!
//! These slices are seeded once and have no transitions of their own yet;
//! the root reducer runs them through [`crate::mvi::StubReducer`].

use serde::{Deserialize, Serialize};

pub type DishId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub label: String,
    /// Price as displayed, e.g. `"4.99"`.
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub designation: String,
    pub abbr: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub label: String,
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}
