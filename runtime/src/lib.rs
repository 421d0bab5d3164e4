//! # Composable Todo Runtime
//!
//! Runtime implementation for the composable todo architecture.
//!
//! This crate provides the Store runtime that owns the current state
//! snapshot and coordinates reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, applies actions one at a time
//! - **Snapshots**: Every transition installs a new `Arc<State>`; readers
//!   keep whatever snapshot they were handed
//! - **Observers**: Snapshot subscriptions for the view layer and an action
//!   broadcast for middleware-style observers
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action, get the new snapshot back
//! let snapshot = store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state_with(|s| s.some_field);
//! ```

use composable_todo_core::reducer::Reducer;
use std::sync::Arc;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use composable_todo_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_action_broadcast_capacity(64)
///     .with_log_transitions(true);
///
/// assert_eq!(config.action_broadcast_capacity, 64);
/// assert!(config.log_transitions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of actions buffered for each action observer before it lags
    pub action_broadcast_capacity: usize,
    /// Log previous state, action and next state for every transition
    pub log_transitions: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    ///
    /// # Arguments
    ///
    /// - `action_broadcast_capacity`: Buffered actions per observer (minimum 1)
    /// - `log_transitions`: Whether to log every transition at `debug`
    #[must_use]
    pub const fn new(action_broadcast_capacity: usize, log_transitions: bool) -> Self {
        Self {
            action_broadcast_capacity,
            log_transitions,
        }
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_action_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.action_broadcast_capacity = capacity;
        self
    }

    /// Enable or disable transition logging
    #[must_use]
    pub const fn with_log_transitions(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            action_broadcast_capacity: 16,
            log_transitions: false,
        }
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Arc, Reducer, StoreConfig};
    use std::fmt::Debug;
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (the current immutable snapshot)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Observers (snapshot subscribers and action observers)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Concurrency
    ///
    /// `send` runs the reducer while holding the snapshot lock, so actions
    /// are applied strictly one at a time even when the store is shared by
    /// reference. Readers never block a transition for longer than it takes
    /// to clone an `Arc`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoListState::new(), TodoReducer::new(), env);
    ///
    /// let snapshot = store.send(TodoAction::CompleteAll);
    /// assert!(snapshot.is_consistent());
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: watch::Sender<Arc<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        /// Every action passed to `send`, for observers.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Debug,
        A: Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_log_transitions(true);
        ///
        /// let store = Store::with_config(
        ///     AppState::default(),
        ///     AppReducer::new(),
        ///     environment,
        ///     config,
        /// );
        /// ```
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (state, _) = watch::channel(Arc::new(initial_state));
            let (action_broadcast, _) = broadcast::channel(config.action_broadcast_capacity.max(1));

            Self {
                state,
                reducer,
                environment,
                config,
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Locks the current snapshot
        /// 2. Calls the reducer with (snapshot, action, environment)
        /// 3. Installs the returned state as the new snapshot and notifies
        ///    snapshot subscribers
        /// 4. Broadcasts the action to action observers
        ///
        /// Transitions are total, so this cannot fail.
        ///
        /// # Returns
        ///
        /// The snapshot produced by this action.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates to the caller and the
        /// previous snapshot stays installed.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Arc<S> {
            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let observed = action.clone();
            let mut installed = None;

            self.state.send_modify(|current| {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let next = Arc::new(self.reducer.reduce(&**current, action, &self.environment));
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                if self.config.log_transitions {
                    tracing::debug!(
                        previous = ?current,
                        action = ?observed,
                        next = ?next,
                        "State transition"
                    );
                }

                *current = Arc::clone(&next);
                installed = Some(next);
            });

            // No observers is the common case, not an error
            if self.action_broadcast.send(observed).is_err() {
                tracing::trace!("No action observers");
            }

            installed.unwrap_or_else(|| self.state())
        }

        /// Current state snapshot
        ///
        /// The snapshot is immutable; later actions install new snapshots
        /// and never touch this one.
        #[must_use]
        pub fn state(&self) -> Arc<S> {
            Arc::clone(&self.state.borrow())
        }

        /// Read current state via a closure
        ///
        /// The closure runs on a cloned snapshot with no lock held, so it
        /// may call [`send`](Self::send); it still sees the snapshot taken
        /// before that call.
        ///
        /// ```ignore
        /// let count = store.state_with(|s| s.todos().len());
        /// ```
        pub fn state_with<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.state();
            f(&snapshot)
        }

        /// Subscribe to state snapshots
        ///
        /// The receiver starts out with the current snapshot marked as seen;
        /// `has_changed` turns true after the next `send`.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.state.subscribe()
        }

        /// Subscribe to all actions sent to this store
        ///
        /// Receivers that fall more than `action_broadcast_capacity` actions
        /// behind get [`broadcast::error::TryRecvError::Lagged`].
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }
    }
}

pub use store::Store;
