use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::comments::CommentsState;
use crate::menu::{Dish, DishId, Leader, Promotion};

/// Whole application state. Each slice is owned by its own reducer and
/// shared by `Arc`, so an untouched slice survives a transition by reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub dishes: Arc<Vec<Dish>>,
    pub comments: Arc<CommentsState>,
    pub leaders: Arc<Vec<Leader>>,
    pub promotions: Arc<Vec<Promotion>>,
}

impl AppState {
    pub fn dish(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// True when every slice is the same allocation in both states.
    pub fn same_slices(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.dishes, &other.dishes)
            && Arc::ptr_eq(&self.comments, &other.comments)
            && Arc::ptr_eq(&self.leaders, &other.leaders)
            && Arc::ptr_eq(&self.promotions, &other.promotions)
    }
}
