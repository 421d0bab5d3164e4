//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the composable todo architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoListState::new())
//!     .when_action(TodoAction::CompleteAll)
//!     .then_state(|state| assert!(state.has_completed()))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use composable_todo_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_testing::mocks::FixedClock;
    /// use composable_todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }
}

/// Install a `tracing` subscriber that writes to the test output
///
/// Honors `RUST_LOG`, defaulting to `debug`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    // Another test may already have installed one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::ReducerTest;
