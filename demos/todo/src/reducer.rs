//! Reducer logic for the todo list.
//!
//! The reducer is total over [`TodoAction`]: an unknown id is a silent
//! no-op and `AddTodo` appends whatever text it is given. Rejecting empty
//! text is the view layer's job.

use crate::action::TodoAction;
use crate::types::{TodoId, TodoItem, TodoList};
use statecraft_core::{environment::IdGenerator, reducer::Reducer};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for new todos
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
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
}

impl Reducer for TodoReducer {
    type State = TodoList;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        todos: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        match action {
            TodoAction::DoTodo { id } => todos.with_complete(&id, true),
            TodoAction::UndoTodo { id } => todos.with_complete(&id, false),
            TodoAction::AddTodo { task } => {
                todos.appended(TodoItem::new(TodoId::generate(env.ids.as_ref()), task))
            }
        }
    }
}
