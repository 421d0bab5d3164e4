//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of immutable [`Todo`] records plus a
//! flag derived from them. Records are shared by `Arc` between successive
//! states; a changed record is always a new allocation.

use crate::error::TodoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward so width and alignment flags apply
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| TodoError::InvalidId(s.to_string()))
    }
}

/// Text of a todo item, guaranteed not to be blank
///
/// The text is kept exactly as entered; only the blank check trims.
///
/// # Example
///
/// ```
/// use todo_list::TodoText;
///
/// assert!(TodoText::parse("buy milk").is_ok());
/// assert!(TodoText::parse("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoText(String);

impl TodoText {
    /// Validates user input
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::EmptyText`] if the text is empty or whitespace.
    pub fn parse(text: impl Into<String>) -> Result<Self, TodoError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TodoError::EmptyText);
        }
        Ok(Self(text))
    }

    /// Borrows the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoText {
    type Error = TodoError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl From<TodoText> for String {
    fn from(text: TodoText) -> Self {
        text.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
///
/// Records are never modified once they are part of a state; use
/// [`Todo::toggled`] and [`Todo::completed`] to derive a changed copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: TodoText,
    /// Whether the todo is completed
    pub is_completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not yet completed todo
    #[must_use]
    pub const fn new(id: TodoId, text: TodoText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            is_completed: false,
            created_at,
        }
    }

    /// A copy with the completion flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }

    /// A copy marked as completed
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            is_completed: true,
            ..self.clone()
        }
    }
}

/// State of the todo list
///
/// `has_completed` is derived from `todos` in the only constructor that
/// takes a collection, so the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTodoList")]
pub struct TodoListState {
    todos: Vec<Arc<Todo>>,
    has_completed: bool,
}

impl TodoListState {
    /// Creates a new empty todo list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            has_completed: false,
        }
    }

    /// Builds a state from a collection, deriving `has_completed`
    #[must_use]
    pub fn from_todos(todos: Vec<Arc<Todo>>) -> Self {
        let has_completed = todos.iter().any(|t| t.is_completed);
        Self {
            todos,
            has_completed,
        }
    }

    /// The todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Arc<Todo>] {
        &self.todos
    }

    /// Whether at least one todo is completed
    #[must_use]
    pub const fn has_completed(&self) -> bool {
        self.has_completed
    }

    /// Whether the list has any todo at all
    #[must_use]
    pub fn has_todos(&self) -> bool {
        !self.todos.is_empty()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Arc<Todo>> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks that the derived flag matches the collection
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.has_completed == self.todos.iter().any(|t| t.is_completed)
    }
}

/// Wire shape accepted when deserializing; the flag is always re-derived.
#[derive(Deserialize)]
struct StoredTodoList {
    #[serde(default)]
    todos: Vec<Arc<Todo>>,
}

impl From<StoredTodoList> for TodoListState {
    fn from(stored: StoredTodoList) -> Self {
        Self::from_todos(stored.todos)
    }
}

/// Commands accepted by the todo list
///
/// Serialized with an upper-case `type` tag, e.g.
/// `{"type":"TOGGLE_COMPLETE","id":3}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new todo
    AddTodo {
        /// Text of the new todo
        text: TodoText,
    },

    /// Remove the todo with this id, if present
    RemoveTodo {
        /// Todo to remove
        id: TodoId,
    },

    /// Flip the completion flag of the todo with this id, if present
    ToggleComplete {
        /// Todo to toggle
        id: TodoId,
    },

    /// Mark every todo as completed
    CompleteAll,

    /// Remove every completed todo
    RemoveCompleted,
}
