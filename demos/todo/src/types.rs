//! Domain types for the todo list.
//!
//! A todo list is an ordered, append-only sequence of items that can be
//! marked done or not done. Which items are shown is governed by a separate
//! [`FilterMode`].

use serde::{Deserialize, Serialize};
use statecraft_core::environment::IdGenerator;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Draws a new id from the generator
    #[must_use]
    pub fn generate(ids: &dyn IdGenerator) -> Self {
        Self(ids.next_id())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// Display text
    pub task: String,
    /// Whether the todo is done
    pub complete: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            complete: false,
        }
    }

    /// Returns a copy of this item with `complete` set to the given value
    #[must_use]
    pub fn with_complete(&self, complete: bool) -> Self {
        Self {
            complete,
            ..self.clone()
        }
    }
}

/// Tasks every session starts with, and whether each is already done
pub const SEED_TASKS: [(&str, bool); 3] = [
    ("Learn React", true),
    ("Learn Firebase", true),
    ("Learn GraphQL", false),
];

/// Ordered list of todo items
///
/// Insertion order is preserved and there is no reordering operation.
/// New values are produced by [`TodoList::appended`] and
/// [`TodoList::with_complete`]; neither touches `self`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    /// Creates a new empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The startup list: two completed items followed by one open item
    #[must_use]
    pub fn seed(ids: &dyn IdGenerator) -> Self {
        SEED_TASKS
            .iter()
            .map(|&(task, complete)| {
                TodoItem::new(TodoId::generate(ids), task).with_complete(complete)
            })
            .collect()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|todo| todo.complete).count()
    }

    /// Iterates over the todos in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }

    /// The todos as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[TodoItem] {
        &self.0
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.0.iter().find(|todo| &todo.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// A new list with `item` added at the end
    #[must_use]
    pub fn appended(&self, item: TodoItem) -> Self {
        let mut todos = Vec::with_capacity(self.0.len() + 1);
        todos.extend_from_slice(&self.0);
        todos.push(item);
        Self(todos)
    }

    /// A new list where the item with `id` has `complete` set to the given value
    ///
    /// Every other item is carried over unchanged. An unknown `id` yields an
    /// equal list.
    #[must_use]
    pub fn with_complete(&self, id: &TodoId, complete: bool) -> Self {
        self.0
            .iter()
            .map(|todo| {
                if &todo.id == id {
                    todo.with_complete(complete)
                } else {
                    todo.clone()
                }
            })
            .collect()
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(todos: Vec<TodoItem>) -> Self {
        Self(todos)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which todos are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterMode {
    /// Every todo
    #[default]
    All,
    /// Only completed todos
    Complete,
    /// Only open todos
    Incomplete,
}

impl FilterMode {
    /// Every mode, in display order
    pub const MODES: [Self; 3] = [Self::All, Self::Complete, Self::Incomplete];

    /// Returns true if `todo` is shown under this mode
    #[must_use]
    pub const fn matches(self, todo: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Complete => todo.complete,
            Self::Incomplete => !todo.complete,
        }
    }

    /// Lowercase name used by the text interface
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
