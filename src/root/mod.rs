//! Root state and the reducer composing all slices.

mod reducer;
mod state;

pub use reducer::{RootReducer, StubRootReducer};
pub use state::AppState;
