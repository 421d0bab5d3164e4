//! # Composable Todo Core
//!
//! Core traits and types for the composable todo architecture.
//!
//! This crate provides the fundamental abstractions for building a
//! single-store application around pure reducers.
//!
//! ## Core Concepts
//!
//! - **State**: Immutable domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(&State, Action, &Environment) → State`
//! - **Environment**: Injected dependencies (clock, id generation)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - No in-place mutation of a previous state
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use composable_todo_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
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
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let before = CounterState::default();
//! let after = CounterReducer.reduce(&before, CounterAction::Increment, &());
//! assert_eq!(before.count, 0);
//! assert_eq!(after.count, 1);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(&State, Action, &Environment) → State`.
/// They never write to the state they are given; every call produces a
/// new value, which lets the runtime hand out previous snapshots freely.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoListState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &TodoListState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> TodoListState {
    ///         match action {
    ///             TodoAction::CompleteAll => state.complete_all(),
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// This is a total, pure function: it must not fail and must not
        /// mutate `state`. Actions the reducer does not handle return a
        /// value equal to `state`.
        ///
        /// # Arguments
        ///
        /// - `state`: The current state (read only)
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The next state
        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State;
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism a reducer needs (wall clock, fresh
/// identifiers) are abstracted behind traits and injected via the
/// Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of identifiers for newly created entities
    ///
    /// Implementations must never hand out the same id twice.
    pub trait IdGenerator: Send + Sync {
        /// Return the next unused identifier
        fn next_id(&self) -> u64;
    }

    /// Monotonic counter id generator
    ///
    /// Ids are strictly increasing in call order, so two entities created
    /// in the same instant still get distinct ids.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_core::environment::{IdGenerator, SequentialIdGenerator};
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 1);
    /// assert_eq!(ids.next_id(), 2);
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}
