//! Reducer trait for MVI architecture.

use std::marker::PhantomData;

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects. Intents the
    /// reducer does not handle must return `state` untouched.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer that returns its input for every intent.
///
/// Placeholder for slices that have no transitions yet (dishes, leaders,
/// promotions). It is incomplete scaffolding, not an optimization: no
/// behaviour is inferred for those slices until real transitions exist.
pub struct StubReducer<S, I>(PhantomData<fn() -> (S, I)>);

impl<S: State, I: Intent> Reducer for StubReducer<S, I> {
    type State = S;
    type Intent = I;

    fn reduce(state: Self::State, _intent: Self::Intent) -> Self::State {
        state
    }
}
