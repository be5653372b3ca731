//! # Statecraft Testing
//!
//! Testing utilities and helpers for the Statecraft reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for state transitions
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_testing::{ReducerTest, sequential_ids};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(sequential_ids())))
//!     .given_state(TodoList::default())
//!     .when_action(TodoAction::AddTodo { task: "Learn Rust".into() })
//!     .then_state(|todos| assert_eq!(todos.len(), 1))
//!     .run();
//! ```

use statecraft_core::environment::IdGenerator;
use uuid::Uuid;


/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, Uuid};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Id generator that counts upward
    ///
    /// Produces `00000000-0000-0000-0000-000000000001`, `...0002`, and so on,
    /// so tests can predict ids and compare whole lists.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_testing::mocks::SequentialIdGenerator;
    /// use statecraft_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_after(0)
        }

        /// Create a generator whose first id is `last + 1`
        #[must_use]
        pub const fn starting_after(last: u64) -> Self {
            Self {
                issued: AtomicU64::new(last),
            }
        }

        /// Number of ids handed out so far (including the starting offset)
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let next = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(next))
        }
    }

    /// Create a fresh sequential id generator for tests
    #[must_use]
    pub const fn sequential_ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new()
    }
}

/// Helper assertions for state transitions
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that a transition left the state as it was
    ///
    /// # Panics
    ///
    /// Panics if `before` and `after` differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged<S: PartialEq + Debug>(before: &S, after: &S) {
        assert_eq!(
            before, after,
            "Expected the transition to be a no-op, but the state changed"
        );
    }

    /// Assert that a transition produced a different state
    ///
    /// # Panics
    ///
    /// Panics if `before` and `after` are equal.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_changed<S: PartialEq + Debug>(before: &S, after: &S) {
        assert_ne!(
            before, after,
            "Expected the transition to change the state, but it did not"
        );
    }
}

/// Install a `tracing` subscriber that writes through the test harness
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call
/// installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{SequentialIdGenerator, sequential_ids};
pub use reducer_test::ReducerTest;
