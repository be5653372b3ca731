//! # Statecraft Runtime
//!
//! Runtime implementation for the Statecraft reducer architecture.
//!
//! This crate provides the [`Store`]: the single owner of one state cell.
//! Every change to that cell goes through the store's reducer, one action at
//! a time, and observers are notified after each transition.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, runs the reducer, publishes new states
//! - **Dispatch**: Routes untyped or foreign actions into the reducer's family
//! - **Subscription**: `watch` channel carrying the latest state
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_runtime::Store;
//!
//! let store = Store::new(FilterMode::All, FilterReducer, ()).named("filter");
//!
//! // Send an action
//! store.send(FilterAction::ShowComplete).await?;
//!
//! // Read state
//! let mode = store.state(|mode| *mode).await;
//! ```

use statecraft_core::action::{ActionType, UnrecognizedAction};
use statecraft_core::reducer::Reducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};

/// Metric names emitted by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use statecraft_core::action::UnrecognizedAction;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Both variants are raised before the reducer runs, so a failed
    /// dispatch never leaves a partially applied transition behind.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The action does not belong to this store's action family
        ///
        /// Fatal to the dispatch call; it is not retried.
        #[error(transparent)]
        UnrecognizedAction(#[from] UnrecognizedAction),

        /// The store has been closed and no longer accepts actions
        #[error("Store `{0}` is closed")]
        Closed(&'static str),
    }
}

pub use error::StoreError;

/// Store module - The runtime for reducers
///
/// Store runtime for coordinating reducer execution and state ownership.
pub mod store {
    use super::{
        ActionType, Arc, AtomicBool, Ordering, Reducer, RwLock, StoreError, UnrecognizedAction,
        metrics, watch,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, written only with reducer output)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Observers (a `watch` channel holding the latest state)
    ///
    /// Cloning a Store yields another handle to the same state cell.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     TodoList::seed(&ids),
    ///     TodoReducer::new(),
    ///     TodoEnvironment::new(Arc::new(SystemIdGenerator)),
    /// );
    ///
    /// store.send(TodoAction::AddTodo { task: "Learn Rust".into() }).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        name: &'static str,
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        closed: Arc<AtomicBool>,
        changes: Arc<watch::Sender<S>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (changes, _) = watch::channel(initial_state.clone());

            Self {
                name: "store",
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                closed: Arc::new(AtomicBool::new(false)),
                changes: Arc::new(changes),
            }
        }

        /// Name this store for logs, metrics and errors
        #[must_use]
        pub const fn named(mut self, name: &'static str) -> Self {
            self.name = name;
            self
        }

        /// The name given with [`Store::named`] (`"store"` by default)
        #[must_use]
        pub const fn name(&self) -> &'static str {
            self.name
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (current state, action, environment)
        /// 3. Replaces the state with the reducer's result
        /// 4. Publishes the new state to subscribers
        ///
        /// Concurrent `send()` calls serialize on the write lock, so actions
        /// are applied one at a time in the order they acquire it.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Closed`] if [`Store::close`] has been called.
        #[tracing::instrument(
            skip(self, action),
            name = "store_send",
            fields(store = self.name, action = action.action_type())
        )]
        pub async fn send(&self, action: A) -> Result<(), StoreError>
        where
            A: ActionType,
        {
            let action_type = action.action_type();

            if self.is_closed() {
                return Err(self.reject_closed());
            }

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            // `close` may have run while this call waited for the lock
            if self.is_closed() {
                return Err(self.reject_closed());
            }

            let start = std::time::Instant::now();
            let next = self.reducer.reduce(&state, action, &self.environment);
            metrics::histogram!(metrics::REDUCER_DURATION_SECONDS, "store" => self.name)
                .record(start.elapsed().as_secs_f64());

            *state = next;
            self.changes.send_replace(state.clone());
            drop(state);

            metrics::counter!(metrics::ACTIONS_TOTAL, "store" => self.name, "action" => action_type)
                .increment(1);
            tracing::debug!("Action applied");

            Ok(())
        }

        /// Route a foreign action into this store's family, then send it
        ///
        /// `T` is typically an umbrella action enum spanning several stores.
        /// If the conversion refuses the action, nothing is applied.
        ///
        /// # Errors
        ///
        /// - [`StoreError::UnrecognizedAction`]: `action` does not belong to this store
        /// - [`StoreError::Closed`]: the store has been closed
        pub async fn dispatch<T>(&self, action: T) -> Result<(), StoreError>
        where
            A: ActionType + TryFrom<T, Error = UnrecognizedAction>,
        {
            match A::try_from(action) {
                Ok(action) => self.send(action).await,
                Err(error) => {
                    tracing::error!(store = self.name, %error, "Dispatch failed");
                    metrics::counter!(metrics::ACTIONS_REJECTED_TOTAL, "store" => self.name, "reason" => "unrecognized")
                        .increment(1);
                    Err(error.into())
                }
            }
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let remaining = store.state(|todos| todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone the current state
        pub async fn snapshot(&self) -> S {
            self.state(S::clone).await
        }

        /// Subscribe to state changes
        ///
        /// The receiver starts at the current state and is updated after
        /// every applied action. Intermediate states may be skipped by a slow
        /// reader; the latest one is always available via `borrow()`.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.changes.subscribe()
        }

        /// Stop accepting actions
        ///
        /// State stays readable. Every later `send`/`dispatch` fails with
        /// [`StoreError::Closed`].
        pub fn close(&self) {
            if !self.closed.swap(true, Ordering::AcqRel) {
                tracing::info!(store = self.name, "Store closed");
            }
        }

        /// Returns true once [`Store::close`] has been called
        #[must_use]
        pub fn is_closed(&self) -> bool {
            self.closed.load(Ordering::Acquire)
        }

        fn reject_closed(&self) -> StoreError {
            tracing::warn!("Rejected action: store is closed");
            metrics::counter!(metrics::ACTIONS_REJECTED_TOTAL, "store" => self.name, "reason" => "closed")
                .increment(1);
            StoreError::Closed(self.name)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                name: self.name,
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                closed: Arc::clone(&self.closed),
                changes: Arc::clone(&self.changes),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.name)
                .field("closed", &self.closed.load(Ordering::Relaxed))
                .finish_non_exhaustive()
        }
    }

}

pub use store::Store;
