use std::sync::Arc;

use crate::action::Action;
use crate::comments::CommentsReducer;
use crate::menu::{Dish, Leader, Promotion};
use crate::mvi::{Reducer, StubReducer};
use crate::root::state::AppState;

type DishesReducer = StubReducer<Arc<Vec<Dish>>, Action>;
type LeadersReducer = StubReducer<Arc<Vec<Leader>>, Action>;
type PromotionsReducer = StubReducer<Arc<Vec<Promotion>>, Action>;

/// Composes the slice reducers over [`AppState`].
///
/// Each slice reducer only sees its own slice. When no slice changes the
/// input `Arc<AppState>` is returned as is.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = Arc<AppState>;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let next = AppState {
            dishes: DishesReducer::reduce(Arc::clone(&state.dishes), intent.clone()),
            leaders: LeadersReducer::reduce(Arc::clone(&state.leaders), intent.clone()),
            promotions: PromotionsReducer::reduce(Arc::clone(&state.promotions), intent.clone()),
            comments: CommentsReducer::reduce(Arc::clone(&state.comments), intent),
        };

        if next.same_slices(&state) {
            state
        } else {
            Arc::new(next)
        }
    }
}

/// Root reducer that ignores every action.
///
/// Mirrors the initial placeholder wiring in which the whole state was
/// seeded and never transitioned. Kept as an explicit stub; it does not
/// stand in for any missing slice behaviour.
pub type StubRootReducer = StubReducer<Arc<AppState>, Action>;
