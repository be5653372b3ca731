//! The dispatcher: two stores behind one serialized entry point.
//!
//! [`TodoApp`] owns the todo store and the filter store. Every action goes
//! through [`TodoApp::dispatch`], which holds a single lock while routing,
//! so actions are applied strictly in dispatch order across both stores and
//! reads never observe a half-dispatched pair of states.

use crate::action::{Action, ActionParseError, FilterAction, TodoAction};
use crate::filter::FilterReducer;
use crate::projection;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{FilterMode, TodoItem, TodoList};
use serde::Serialize;
use statecraft_core::environment::IdGenerator;
use statecraft_runtime::{Store, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Store owning the todo list
pub type TodoStore = Store<TodoList, TodoAction, TodoEnvironment, TodoReducer>;

/// Store owning the filter mode
pub type FilterStore = Store<FilterMode, FilterAction, (), FilterReducer>;

/// Errors from dispatching an action given in its JSON form
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The payload could not be read as an action
    #[error(transparent)]
    Parse(#[from] ActionParseError),

    /// A store refused the action
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DispatchError {
    /// Returns true if the action's tag is unknown
    ///
    /// Unrecognized actions are programmer errors and end the session.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            Self::Parse(ActionParseError::Unrecognized(_))
                | Self::Store(StoreError::UnrecognizedAction(_))
        )
    }
}

/// A consistent read of both stores
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Every todo, in order
    pub todos: TodoList,
    /// Active filter
    pub filter: FilterMode,
}

impl Snapshot {
    /// Todos shown under the active filter
    #[must_use]
    pub fn visible(&self) -> Vec<TodoItem> {
        projection::visible(&self.todos, self.filter)
    }
}

/// The reducer-driven todo application
#[derive(Clone, Debug)]
pub struct TodoApp {
    todos: TodoStore,
    filter: FilterStore,
    dispatch_lock: Arc<Mutex<()>>,
}

impl TodoApp {
    /// Creates the application with the given list and filter `All`
    #[must_use]
    pub fn new(todos: TodoList, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            todos: Store::new(todos, TodoReducer::new(), TodoEnvironment::new(ids)).named("todos"),
            filter: Store::new(FilterMode::All, FilterReducer::new(), ()).named("filter"),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates the application with the startup list
    #[must_use]
    pub fn seeded(ids: Arc<dyn IdGenerator>) -> Self {
        let todos = TodoList::seed(ids.as_ref());
        Self::new(todos, ids)
    }

    /// Apply an action to the store that owns its family
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnrecognizedAction`]: the owning store refused the action
    /// - [`StoreError::Closed`]: the application has been closed
    pub async fn dispatch(&self, action: impl Into<Action>) -> Result<(), StoreError> {
        let action = action.into();
        let _serialized = self.dispatch_lock.lock().await;

        tracing::debug!(action = action.action_type(), "Dispatching");

        match action {
            Action::Todo(_) => self.todos.dispatch(action).await,
            Action::Filter(_) => self.filter.dispatch(action).await,
        }
    }

    /// Parse an action from its JSON form and dispatch it
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Parse`]: malformed payload or unknown `type`
    /// - [`DispatchError::Store`]: see [`TodoApp::dispatch`]
    pub async fn dispatch_json(&self, json: &str) -> Result<(), DispatchError> {
        let action = Action::from_json(json).inspect_err(|error| {
            tracing::warn!(%error, "Could not read action");
        })?;
        self.dispatch(action).await?;
        Ok(())
    }

    /// Current todo list
    pub async fn todos(&self) -> TodoList {
        self.todos.snapshot().await
    }

    /// Current filter mode
    pub async fn filter(&self) -> FilterMode {
        self.filter.state(|mode| *mode).await
    }

    /// Both states, read between dispatches
    pub async fn snapshot(&self) -> Snapshot {
        let _serialized = self.dispatch_lock.lock().await;
        Snapshot {
            todos: self.todos.snapshot().await,
            filter: self.filter.state(|mode| *mode).await,
        }
    }

    /// Todos shown under the current filter, derived fresh
    pub async fn visible(&self) -> Vec<TodoItem> {
        self.snapshot().await.visible()
    }

    /// The store owning the todo list, for subscriptions
    #[must_use]
    pub const fn todo_store(&self) -> &TodoStore {
        &self.todos
    }

    /// The store owning the filter mode, for subscriptions
    #[must_use]
    pub const fn filter_store(&self) -> &FilterStore {
        &self.filter
    }

    /// Tear down both stores; later dispatches fail with [`StoreError::Closed`]
    pub fn close(&self) {
        self.todos.close();
        self.filter.close();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use statecraft_core::action::UnrecognizedAction;
    use statecraft_testing::sequential_ids;
    use uuid::Uuid;

    fn app() -> TodoApp {
        TodoApp::seeded(Arc::new(sequential_ids()))
    }

    #[tokio::test]
    async fn starts_with_seed_and_all() {
        let app = app();
        assert_eq!(app.todos().await.len(), 3);
        assert_eq!(app.filter().await, FilterMode::All);
        assert_eq!(app.visible().await.len(), 3);
    }

    #[tokio::test]
    async fn routes_by_family() {
        let app = app();

        app.dispatch(FilterAction::ShowComplete).await.unwrap();
        app.dispatch(TodoAction::UndoTodo {
            id: TodoId::from_uuid(Uuid::from_u128(1)),
        })
        .await
        .unwrap();

        let snapshot = app.snapshot().await;
        assert_eq!(snapshot.filter, FilterMode::Complete);
        assert_eq!(snapshot.todos.completed_count(), 1);
        assert_eq!(snapshot.visible().len(), 1);
    }

    #[tokio::test]
    async fn store_rejects_action_of_other_family() {
        let app = app();

        let result = app
            .filter_store()
            .dispatch(Action::Todo(TodoAction::AddTodo { task: "x".into() }))
            .await;

        assert_eq!(
            result,
            Err(StoreError::UnrecognizedAction(UnrecognizedAction::new(
                "ADD_TODO", "filter"
            )))
        );
        assert_eq!(app.todos().await.len(), 3);
    }

    #[tokio::test]
    async fn dispatch_json_unknown_type_is_unrecognized() {
        let app = app();

        let error = app.dispatch_json(r#"{"type":"REMOVE_TODO"}"#).await.unwrap_err();

        assert!(error.is_unrecognized());
        assert_eq!(app.snapshot().await.todos.len(), 3);
    }

    #[tokio::test]
    async fn dispatch_json_malformed_is_not_unrecognized() {
        let app = app();
        let error = app.dispatch_json("{").await.unwrap_err();
        assert!(!error.is_unrecognized());
    }

    #[tokio::test]
    async fn closed_app_rejects_dispatch() {
        let app = app();
        app.close();

        let result = app.dispatch(FilterAction::ShowAll).await;

        assert_eq!(result, Err(StoreError::Closed("filter")));
    }

    #[tokio::test]
    async fn subscribers_see_new_list() {
        let app = app();
        let mut todos = app.todo_store().subscribe();

        app.dispatch(TodoAction::AddTodo {
            task: "Learn Rust".into(),
        })
        .await
        .unwrap();

        todos.changed().await.unwrap();
        assert_eq!(todos.borrow_and_update().len(), 4);
    }
}
