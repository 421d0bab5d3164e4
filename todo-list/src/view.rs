//! View boundary.
//!
//! [`TodoListView`] is the plain data a renderer needs for one frame, built
//! from a state snapshot. [`Bindings`] are the callbacks a renderer invokes
//! on user input; each one dispatches exactly one action.

use crate::app::{AppAction, AppState, AppStore};
use crate::error::TodoError;
use crate::types::{TodoAction, TodoId, TodoText};
use std::fmt;
use std::sync::Arc;

/// Screen title
pub const TITLE: &str = "Todo List";

/// Placeholder shown in an empty input
pub const INPUT_PLACEHOLDER: &str = "Enter an item";

/// One rendered list row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRow {
    /// Id passed back to the toggle and remove callbacks
    pub id: TodoId,
    /// Row label
    pub text: String,
    /// Checkbox state
    pub is_completed: bool,
}

/// Footer buttons and whether each can be pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterView {
    /// "Remove completed" needs at least one completed todo
    pub remove_completed_enabled: bool,
    /// "Complete all" needs at least one todo
    pub complete_all_enabled: bool,
}

/// Everything needed to render the screen once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoListView {
    /// Screen title
    pub title: &'static str,
    /// Placeholder for the input
    pub placeholder: &'static str,
    /// Current input text
    pub draft: String,
    /// Rows in list order
    pub rows: Vec<TodoRow>,
    /// Footer state
    pub footer: FooterView,
}

impl TodoListView {
    /// Builds the view model for a snapshot
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let rows = state
            .todos
            .todos()
            .iter()
            .map(|todo| TodoRow {
                id: todo.id,
                text: todo.text.to_string(),
                is_completed: todo.is_completed,
            })
            .collect();

        Self {
            title: TITLE,
            placeholder: INPUT_PLACEHOLDER,
            draft: state.draft.clone(),
            rows,
            footer: FooterView {
                remove_completed_enabled: state.todos.has_completed(),
                complete_all_enabled: state.todos.has_todos(),
            },
        }
    }
}

impl fmt::Display for TodoListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.draft.is_empty() {
            writeln!(f, "> ({})", self.placeholder)?;
        } else {
            writeln!(f, "> {}", self.draft)?;
        }

        for row in &self.rows {
            let mark = if row.is_completed { 'x' } else { ' ' };
            writeln!(f, "[{mark}] {:>3}  {}", row.id, row.text)?;
        }

        write!(
            f,
            "{}  {}",
            button("Remove completed", self.footer.remove_completed_enabled),
            button("Complete all", self.footer.complete_all_enabled),
        )
    }
}

/// `[label]` when enabled, `(label)` when disabled
fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

/// Callbacks bound to a store
///
/// Each method dispatches one action and returns the snapshot it produced,
/// so a renderer can draw the next frame without re-reading the store.
/// Like [`Store::send`](composable_todo_runtime::Store::send), the returned
/// snapshot may be ignored; the dispatch is the point of the call.
#[derive(Clone, Copy)]
pub struct Bindings<'a> {
    store: &'a AppStore,
}

impl<'a> Bindings<'a> {
    /// Binds callbacks to `store`
    #[must_use]
    pub const fn new(store: &'a AppStore) -> Self {
        Self { store }
    }

    /// Adds a todo with the given text
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::EmptyText`] for blank text; nothing is
    /// dispatched in that case.
    pub fn add_todo(&self, text: &str) -> Result<Arc<AppState>, TodoError> {
        let text = TodoText::parse(text)?;
        Ok(self.dispatch(TodoAction::AddTodo { text }))
    }

    /// Removes the todo with `id`
    pub fn remove_todo(&self, id: TodoId) -> Arc<AppState> {
        self.dispatch(TodoAction::RemoveTodo { id })
    }

    /// Toggles the todo with `id`
    pub fn toggle_complete(&self, id: TodoId) -> Arc<AppState> {
        self.dispatch(TodoAction::ToggleComplete { id })
    }

    /// Marks every todo completed
    pub fn complete_all(&self) -> Arc<AppState> {
        self.dispatch(TodoAction::CompleteAll)
    }

    /// Removes every completed todo
    pub fn remove_completed(&self) -> Arc<AppState> {
        self.dispatch(TodoAction::RemoveCompleted)
    }

    /// Replaces the input text
    pub fn change_draft(&self, text: impl Into<String>) -> Arc<AppState> {
        self.store.send(AppAction::DraftChanged(text.into()))
    }

    /// Submits the input text; blank input is kept and nothing is added
    pub fn submit_draft(&self) -> Arc<AppState> {
        self.store.send(AppAction::DraftSubmitted)
    }

    /// The view model for the store's current snapshot
    #[must_use]
    pub fn view(&self) -> TodoListView {
        self.store.state_with(TodoListView::from_state)
    }

    fn dispatch(&self, action: TodoAction) -> Arc<AppState> {
        self.store.send(AppAction::Todos(action))
    }
}

impl fmt::Debug for Bindings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings").finish_non_exhaustive()
    }
}
