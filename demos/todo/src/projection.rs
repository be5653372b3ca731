//! The visible subset of the todo list.
//!
//! Always derived from the current list and mode on demand; nothing here is
//! cached or stored.

use crate::types::{FilterMode, TodoItem, TodoList};

/// Todos shown under `mode`, in list order
pub fn project(todos: &TodoList, mode: FilterMode) -> impl Iterator<Item = &TodoItem> + '_ {
    todos.iter().filter(move |todo| mode.matches(todo))
}

/// Owned copy of [`project`], for handing to a renderer
#[must_use]
pub fn visible(todos: &TodoList, mode: FilterMode) -> Vec<TodoItem> {
    project(todos, mode).cloned().collect()
}
