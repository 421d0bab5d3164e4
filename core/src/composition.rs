//! Reducer composition utilities
//!
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state,
//!   and on the subset of parent actions addressed to that slice
//!
//! Parent actions that do not map to a child action leave the parent state
//! unchanged, so extending the parent action set never breaks a child.
//!
//! # Examples
//!
//! ```
//! use composable_todo_core::composition::scope_reducer;
//! use composable_todo_core::reducer::Reducer;
//!
//! // Child state and reducer
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &CounterState, action: CounterAction, _env: &()) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!         }
//!     }
//! }
//!
//! // Parent state and actions
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     counter: CounterState,
//!     title: String,
//! }
//!
//! enum AppAction {
//!     Counter(CounterAction),
//!     Rename(String),
//! }
//!
//! let scoped = scope_reducer(
//!     CounterReducer,
//!     |app: &AppState| &app.counter,
//!     |app: &AppState, counter: CounterState| AppState {
//!         counter,
//!         ..app.clone()
//!     },
//!     |action: AppAction| match action {
//!         AppAction::Counter(action) => Some(action),
//!         AppAction::Rename(_) => None,
//!     },
//! );
//!
//! let state = AppState::default();
//! let next = scoped.reduce(&state, AppAction::Counter(CounterAction::Increment), &());
//! assert_eq!(next.counter.count, 1);
//!
//! // Not addressed to the counter slice: identity
//! let same = scoped.reduce(&next, AppAction::Rename("x".to_string()), &());
//! assert_eq!(same, next);
//! ```

use crate::reducer::Reducer;

/// Scopes a reducer to operate on a subset of a larger state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `A`: The parent action type
/// - `R`: The child reducer; its state is a slice of `S`
///
/// # Arguments
///
/// - `get_state`: Borrow the child slice out of the parent
/// - `set_state`: Build a new parent holding the given child slice
/// - `extract_action`: Map a parent action to a child action, or `None`
///   if the action is not addressed to this slice
pub const fn scope_reducer<S, A, R>(
    reducer: R,
    get_state: fn(&S) -> &R::State,
    set_state: fn(&S, R::State) -> S,
    extract_action: fn(A) -> Option<R::Action>,
) -> ScopedReducer<S, A, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        extract_action,
    }
}

/// A scoped reducer that operates on a slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, A, R>
where
    R: Reducer,
{
    reducer: R,
    get_state: fn(&S) -> &R::State,
    set_state: fn(&S, R::State) -> S,
    extract_action: fn(A) -> Option<R::Action>,
}

impl<S, A, R> Reducer for ScopedReducer<S, A, R>
where
    S: Clone,
    R: Reducer,
{
    type State = S;
    type Action = A;
    type Environment = R::Environment;

    fn reduce(&self, state: &Self::State, action: Self::Action, env: &Self::Environment) -> S {
        match (self.extract_action)(action) {
            Some(sub_action) => {
                let sub_state = self.reducer.reduce((self.get_state)(state), sub_action, env);
                (self.set_state)(state, sub_state)
            },
            None => state.clone(),
        }
    }
}
