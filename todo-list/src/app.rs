//! Application root: the todo list slice plus the text input draft.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoListState, TodoText};
use composable_todo_core::{
    composition::{ScopedReducer, scope_reducer},
    reducer::Reducer,
};
use composable_todo_runtime::{Store, StoreConfig};
use serde::{Deserialize, Serialize};

/// Whole-screen state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The todo list
    pub todos: TodoListState,
    /// Current contents of the text input
    #[serde(default)]
    pub draft: String,
}

impl AppState {
    /// Empty list, empty input
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: TodoListState::new(),
            draft: String::new(),
        }
    }
}

/// Actions accepted at the application root
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// A command for the todo list
    Todos(TodoAction),
    /// The user edited the input
    DraftChanged(String),
    /// The user submitted the input
    DraftSubmitted,
}

impl From<TodoAction> for AppAction {
    fn from(action: TodoAction) -> Self {
        Self::Todos(action)
    }
}

/// Root reducer
///
/// List commands go to [`TodoReducer`] through a scoped reducer; draft
/// edits are handled here. A submitted draft becomes an `AddTodo` only if
/// it is not blank.
pub struct AppReducer {
    todos: ScopedReducer<AppState, AppAction, TodoReducer>,
}

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub fn new() -> Self {
        Self {
            todos: scope_reducer(
                TodoReducer::new(),
                |app: &AppState| &app.todos,
                |app: &AppState, todos: TodoListState| AppState {
                    todos,
                    draft: app.draft.clone(),
                },
                |action: AppAction| match action {
                    AppAction::Todos(action) => Some(action),
                    AppAction::DraftChanged(_) | AppAction::DraftSubmitted => None,
                },
            ),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        match action {
            AppAction::DraftChanged(draft) => AppState {
                todos: state.todos.clone(),
                draft,
            },
            AppAction::DraftSubmitted => match TodoText::parse(state.draft.as_str()) {
                Ok(text) => {
                    let add = AppAction::Todos(TodoAction::AddTodo { text });
                    let next = self.todos.reduce(state, add, env);
                    AppState {
                        draft: String::new(),
                        ..next
                    }
                },
                Err(error) => {
                    tracing::debug!(%error, "Draft not submitted");
                    state.clone()
                },
            },
            action @ AppAction::Todos(_) => self.todos.reduce(state, action, env),
        }
    }
}

/// The store type the screen runs on
pub type AppStore = Store<AppState, AppAction, TodoEnvironment, AppReducer>;

/// Builds a store with an empty screen
#[must_use]
pub fn app_store(environment: TodoEnvironment, config: StoreConfig) -> AppStore {
    Store::with_config(AppState::new(), AppReducer::new(), environment, config)
}
