//! # Statecraft Core
//!
//! Core traits and types for the Statecraft reducer architecture.
//!
//! This crate provides the small set of abstractions every feature is built
//! from: pure reducers, closed action families, and injected dependencies.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by exactly one store
//! - **Action**: Closed enum describing an intended state change
//! - **Reducer**: Pure function `(&State, Action, &Environment) → State`
//! - **Environment**: Injected dependencies via traits (e.g. [`IdGenerator`])
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Single writer per state cell
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use statecraft_core::reducer::Reducer;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Light {
//!     On,
//!     Off,
//! }
//!
//! enum Switch {
//!     Flip,
//! }
//!
//! struct LightReducer;
//!
//! impl Reducer for LightReducer {
//!     type State = Light;
//!     type Action = Switch;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &Light, action: Switch, _env: &()) -> Light {
//!         match (action, state) {
//!             (Switch::Flip, Light::On) => Light::Off,
//!             (Switch::Flip, Light::Off) => Light::On,
//!         }
//!     }
//! }
//!
//! let next = LightReducer.reduce(&Light::Off, Switch::Flip, &());
//! assert_eq!(next, Light::On);
//! ```

pub use environment::{IdGenerator, SystemIdGenerator};
pub use uuid::Uuid;

/// Action module - Closed action families and the routing error
///
/// Actions are immutable, tagged descriptions of an intended state change.
/// Each feature defines one enum per action family; exhaustive matching
/// replaces a runtime "unknown action" branch inside the reducer.
///
/// The only place an unknown action can still appear is at a boundary
/// where actions arrive untyped (wire input) or are routed between
/// families. That case is reported as [`UnrecognizedAction`].
pub mod action {
    use thiserror::Error;

    /// Tag metadata for an action enum
    ///
    /// Usually derived with `#[derive(Action)]` from `statecraft-macros`,
    /// which names every variant in `SCREAMING_SNAKE_CASE`
    /// (`AddTodo` becomes `"ADD_TODO"`).
    pub trait ActionType {
        /// Every tag this action family understands, in declaration order
        const ACTION_TYPES: &'static [&'static str];

        /// The tag of this particular action
        fn action_type(&self) -> &'static str;

        /// Returns true if `tag` names a variant of this family
        #[must_use]
        fn recognizes(tag: &str) -> bool {
            Self::ACTION_TYPES.contains(&tag)
        }
    }

    /// An action reached a reducer that does not handle its tag
    ///
    /// This is a programmer error: a correctly wired view layer never
    /// produces it. It is fatal to the dispatch call that raised it and
    /// leaves all state untouched.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("unrecognized action `{action_type}` (expected a {expected} action)")]
    pub struct UnrecognizedAction {
        /// The offending tag
        pub action_type: String,
        /// Name of the action family that rejected it
        pub expected: &'static str,
    }

    impl UnrecognizedAction {
        /// Creates a new `UnrecognizedAction`
        #[must_use]
        pub fn new(action_type: impl Into<String>, expected: &'static str) -> Self {
            Self {
                action_type: action_type.into(),
                expected,
            }
        }
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(&State, Action, &Environment) → State`.
///
/// The current state is only ever borrowed, so a reducer cannot mutate its
/// input; it returns a complete next state instead. Structural sharing is
/// allowed, observable mutation is not.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer produces
    /// - `Action`: The action family this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for FilterReducer {
    ///     type State = FilterMode;
    ///     type Action = FilterAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(&self, _mode: &FilterMode, action: FilterAction, _env: &()) -> FilterMode {
    ///         match action {
    ///             FilterAction::ShowAll => FilterMode::All,
    ///             FilterAction::ShowComplete => FilterMode::Complete,
    ///             FilterAction::ShowIncomplete => FilterMode::Incomplete,
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

        /// Compute the next state from the current state and an action
        ///
        /// # Arguments
        ///
        /// - `state`: The current state (read-only)
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The complete next state
        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State;
    }

    /// Apply a sequence of actions in order, returning the final state
    ///
    /// Equivalent to dispatching each action one after another. The initial
    /// state is left as it was.
    pub fn reduce_all<R, I>(
        reducer: &R,
        state: &R::State,
        actions: I,
        env: &R::Environment,
    ) -> R::State
    where
        R: Reducer,
        R::State: Clone,
        I: IntoIterator<Item = R::Action>,
    {
        actions
            .into_iter()
            .fold(state.clone(), |current, action| reducer.reduce(&current, action, env))
    }
}

/// Environment module - Dependency injection traits
///
/// All external collaborators a reducer needs are abstracted behind traits
/// and passed in through the Environment parameter, so reducers stay
/// deterministic under test.
pub mod environment {
    use uuid::Uuid;

    /// Identifier generator - produces a fresh opaque id per call
    ///
    /// Implementations must never return the same id twice within a process.
    ///
    /// # Examples
    ///
    /// ```
    /// use statecraft_core::environment::{IdGenerator, SystemIdGenerator};
    ///
    /// let ids = SystemIdGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a new unique identifier
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator backed by random (v4) UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemIdGenerator;

    impl IdGenerator for SystemIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
