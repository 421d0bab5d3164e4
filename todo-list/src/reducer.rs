//! Reducer logic for the todo list.
//!
//! Every transition builds a new [`TodoListState`] through
//! [`TodoListState::from_todos`], which re-derives `has_completed`. Records
//! that a command does not touch are carried over by `Arc`.

use crate::types::{Todo, TodoAction, TodoId, TodoListState, TodoText};
use composable_todo_core::{
    environment::{Clock, IdGenerator, SequentialIdGenerator, SystemClock},
    reducer::Reducer,
};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and a counter starting at 1
    #[must_use]
    pub fn live() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(SequentialIdGenerator::new()))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_todo(state: &TodoListState, text: TodoText, env: &TodoEnvironment) -> TodoListState {
        let todo = Todo::new(TodoId::new(env.ids.next_id()), text, env.clock.now());
        tracing::debug!(id = %todo.id, "Adding todo");

        let mut todos = Vec::with_capacity(state.len() + 1);
        todos.extend(state.todos().iter().cloned());
        todos.push(Arc::new(todo));
        TodoListState::from_todos(todos)
    }

    fn remove_todo(state: &TodoListState, id: TodoId) -> TodoListState {
        let mut removed = false;
        let todos = state
            .todos()
            .iter()
            .filter(|t| {
                // Ids are unique, but only ever drop the first match
                if !removed && t.id == id {
                    removed = true;
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        if !removed {
            tracing::debug!(%id, "Remove ignored, no such todo");
        }
        TodoListState::from_todos(todos)
    }

    fn toggle_complete(state: &TodoListState, id: TodoId) -> TodoListState {
        let todos = state
            .todos()
            .iter()
            .map(|t| {
                if t.id == id {
                    Arc::new(t.toggled())
                } else {
                    Arc::clone(t)
                }
            })
            .collect();
        TodoListState::from_todos(todos)
    }

    /// `has_completed` is recomputed, so an empty list stays `false`
    fn complete_all(state: &TodoListState) -> TodoListState {
        let todos = state
            .todos()
            .iter()
            .map(|t| {
                if t.is_completed {
                    Arc::clone(t)
                } else {
                    Arc::new(t.completed())
                }
            })
            .collect();
        TodoListState::from_todos(todos)
    }

    fn remove_completed(state: &TodoListState) -> TodoListState {
        let todos = state
            .todos()
            .iter()
            .filter(|t| !t.is_completed)
            .cloned()
            .collect();
        TodoListState::from_todos(todos)
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        match action {
            TodoAction::AddTodo { text } => Self::add_todo(state, text, env),
            TodoAction::RemoveTodo { id } => Self::remove_todo(state, id),
            TodoAction::ToggleComplete { id } => Self::toggle_complete(state, id),
            TodoAction::CompleteAll => Self::complete_all(state),
            TodoAction::RemoveCompleted => Self::remove_completed(state),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use composable_todo_testing::{ReducerTest, test_clock};

    fn create_test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
    }

    fn text(s: &str) -> TodoText {
        TodoText::parse(s).unwrap()
    }

    fn add(s: &str) -> TodoAction {
        TodoAction::AddTodo { text: text(s) }
    }

    /// State holding `items`, with ids 1.. in order
    fn given(items: &[(&str, bool)]) -> TodoListState {
        let todos = items
            .iter()
            .zip(1..)
            .map(|((s, done), id)| {
                let mut todo = Todo::new(TodoId::new(id), text(s), test_clock().now());
                todo.is_completed = *done;
                Arc::new(todo)
            })
            .collect();
        TodoListState::from_todos(todos)
    }

    #[test]
    fn test_add_todo_to_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_action(add("buy milk"))
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                let todo = &state.todos()[0];
                assert_eq!(todo.id, TodoId::new(1));
                assert_eq!(todo.text.as_str(), "buy milk");
                assert!(!todo.is_completed);
                assert_eq!(todo.created_at, test_clock().now());
                assert!(!state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_add_todo_appends_in_order_with_unique_ids() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_actions([add("a"), add("b"), add("c")])
            .then_state(|state| {
                let texts: Vec<_> = state.todos().iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, ["a", "b", "c"]);
                let ids: Vec<_> = state.todos().iter().map(|t| t.id.get()).collect();
                assert_eq!(ids, [1, 2, 3]);
            })
            .run();
    }

    #[test]
    fn test_add_todo_keeps_completed_flag() {
        ReducerTest::new(TodoReducer::new())
            .with_env(TodoEnvironment::new(
                Arc::new(test_clock()),
                Arc::new(SequentialIdGenerator::starting_at(10)),
            ))
            .given_state(given(&[("done", true)]))
            .when_action(add("new"))
            .then_state(|state| {
                assert!(state.has_completed());
                assert_eq!(state.todos()[1].id, TodoId::new(10));
            })
            .run();
    }

    #[test]
    fn test_remove_todo() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", false), ("b", true), ("c", false)]))
            .when_action(TodoAction::RemoveTodo { id: TodoId::new(2) })
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                assert!(state.get(TodoId::new(2)).is_none());
                assert!(!state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_remove_todo_unknown_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", true)]))
            .when_action(TodoAction::RemoveTodo { id: TodoId::new(99) })
            .then_transition(|given, state| {
                assert_eq!(given, state);
            })
            .run();
    }

    #[test]
    fn test_toggle_complete_sets_flag() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", false), ("b", false)]))
            .when_action(TodoAction::ToggleComplete { id: TodoId::new(1) })
            .then_state(|state| {
                assert!(state.todos()[0].is_completed);
                assert!(!state.todos()[1].is_completed);
                assert!(state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_toggle_complete_twice_clears_flag() {
        let id = TodoId::new(1);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", false)]))
            .when_actions([
                TodoAction::ToggleComplete { id },
                TodoAction::ToggleComplete { id },
            ])
            .then_state(|state| {
                assert!(!state.todos()[0].is_completed);
                assert!(!state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_toggle_complete_unknown_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", false), ("b", true)]))
            .when_action(TodoAction::ToggleComplete { id: TodoId::new(7) })
            .then_transition(|given, state| {
                assert_eq!(given, state);
            })
            .run();
    }

    #[test]
    fn test_toggle_shares_untouched_records() {
        let state = given(&[("a", false), ("b", false)]);
        let next = TodoReducer.reduce(
            &state,
            TodoAction::ToggleComplete { id: TodoId::new(2) },
            &create_test_env(),
        );

        assert!(Arc::ptr_eq(&state.todos()[0], &next.todos()[0]));
        assert!(!Arc::ptr_eq(&state.todos()[1], &next.todos()[1]));
        assert!(!state.todos()[1].is_completed);
    }

    #[test]
    fn test_complete_all() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_actions([add("a"), add("b"), TodoAction::CompleteAll])
            .then_state(|state| {
                assert!(state.todos().iter().all(|t| t.is_completed));
                assert!(state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_complete_all_reuses_completed_records() {
        let state = given(&[("a", true), ("b", false)]);
        let next = TodoReducer.reduce(&state, TodoAction::CompleteAll, &create_test_env());

        assert!(Arc::ptr_eq(&state.todos()[0], &next.todos()[0]));
        assert!(next.todos()[1].is_completed);
    }

    #[test]
    fn test_complete_all_on_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_action(TodoAction::CompleteAll)
            .then_state(|state| {
                assert!(state.is_empty());
                assert!(!state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_remove_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given(&[("a", true), ("b", false), ("c", true)]))
            .when_action(TodoAction::RemoveCompleted)
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.todos()[0].text.as_str(), "b");
                assert!(!state.has_completed());
            })
            .run();
    }

    #[test]
    fn test_toggle_then_remove_completed_empties_list() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_actions([
                add("buy milk"),
                TodoAction::ToggleComplete { id: TodoId::new(1) },
            ])
            .then_state(|state| assert!(state.has_completed()))
            .run();

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoListState::new())
            .when_actions([
                add("buy milk"),
                TodoAction::ToggleComplete { id: TodoId::new(1) },
                TodoAction::RemoveCompleted,
            ])
            .then_state(|state| {
                assert!(state.is_empty());
                assert!(!state.has_completed());
            })
            .run();
    }
}
