//! Todo list screen built on the composable todo architecture.
//!
//! A list of items with text, completion state, and identity; an input to
//! add items; per-item toggle/remove; and bulk "complete all" / "remove
//! completed" actions. State lives in a single [`Store`] and every command
//! produces a new immutable snapshot.
//!
//! - [`TodoReducer`]: the five list transitions
//! - [`AppReducer`]: the list slice plus the input draft
//! - [`TodoListView`] / [`Bindings`]: the boundary a renderer talks to
//!
//! # Quick Start
//!
//! ```
//! use composable_todo_runtime::StoreConfig;
//! use todo_list::{app_store, Bindings, TodoEnvironment, TodoId};
//!
//! let store = app_store(TodoEnvironment::live(), StoreConfig::default());
//! let bindings = Bindings::new(&store);
//!
//! let snapshot = bindings.add_todo("buy milk")?;
//! let id = snapshot.todos.todos()[0].id;
//!
//! let snapshot = bindings.toggle_complete(id);
//! assert!(snapshot.todos.has_completed());
//!
//! let snapshot = bindings.remove_completed();
//! assert!(snapshot.todos.is_empty());
//! # Ok::<(), todo_list::TodoError>(())
//! ```
//!
//! [`Store`]: composable_todo_runtime::Store

pub mod app;
pub mod command;
pub mod error;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{AppAction, AppReducer, AppState, AppStore, app_store};
pub use command::Command;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Todo, TodoAction, TodoId, TodoListState, TodoText};
pub use view::{Bindings, TodoListView};
