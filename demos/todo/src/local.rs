//! The component-local variant.
//!
//! No store and no actions: one value owns the list and the text being
//! typed, and mutates both in place. There is no filter in this variant.

use crate::types::{TodoId, TodoItem, TodoList};
use statecraft_core::environment::IdGenerator;
use std::sync::Arc;

/// Todo list plus an input draft, owned by a single component
#[derive(Clone)]
pub struct LocalTodos {
    todos: Vec<TodoItem>,
    draft: String,
    ids: Arc<dyn IdGenerator>,
}

impl LocalTodos {
    /// Creates an empty list with an empty draft
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            ids,
        }
    }

    /// Creates the list with the startup items
    #[must_use]
    pub fn seeded(ids: Arc<dyn IdGenerator>) -> Self {
        let todos = TodoList::seed(ids.as_ref()).as_slice().to_vec();

        Self {
            todos,
            draft: String::new(),
            ids,
        }
    }

    /// The todos, in insertion order
    #[must_use]
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Text typed so far
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Flip `complete` on the item with `id`
    ///
    /// Returns false, changing nothing, if no item has that id.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                todo.complete = !todo.complete;
                tracing::debug!(%id, complete = todo.complete, "Toggled local todo");
                true
            }
            None => false,
        }
    }

    /// Turn the draft into a new open item
    ///
    /// Returns the new item's id. An empty draft adds nothing and returns
    /// `None`; whitespace counts as text. The draft is cleared either way.
    pub fn submit(&mut self) -> Option<TodoId> {
        let task = std::mem::take(&mut self.draft);
        if task.is_empty() {
            return None;
        }

        let id = TodoId::generate(self.ids.as_ref());
        tracing::debug!(%id, "Added local todo");
        self.todos.push(TodoItem::new(id, task));
        Some(id)
    }
}

impl std::fmt::Debug for LocalTodos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalTodos")
            .field("todos", &self.todos)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use statecraft_testing::sequential_ids;
    use uuid::Uuid;

    fn id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    fn local() -> LocalTodos {
        LocalTodos::seeded(Arc::new(sequential_ids()))
    }

    #[test]
    fn seeded_matches_startup_list() {
        let todos = local();
        let flags: Vec<_> = todos.todos().iter().map(|t| t.complete).collect();
        assert_eq!(flags, [true, true, false]);
        assert_eq!(todos.draft(), "");
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut todos = local();

        assert!(todos.toggle(&id(1)));
        assert!(!todos.todos()[0].complete);
        assert!(todos.todos()[1].complete);

        assert!(todos.toggle(&id(1)));
        assert!(todos.todos()[0].complete);
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let mut todos = local();
        let before = todos.todos().to_vec();

        assert!(!todos.toggle(&id(99)));
        assert_eq!(todos.todos(), before.as_slice());
    }

    #[test]
    fn submit_appends_and_clears_draft() {
        let mut todos = local();
        todos.set_draft("Learn Rust");

        let added = todos.submit().unwrap();

        assert_eq!(added, id(4));
        assert_eq!(todos.todos().len(), 4);
        assert_eq!(todos.todos()[3].task, "Learn Rust");
        assert!(!todos.todos()[3].complete);
        assert_eq!(todos.draft(), "");
    }

    #[test]
    fn submit_keeps_whitespace_draft_as_typed() {
        let mut todos = local();
        todos.set_draft("  ");

        assert_eq!(todos.submit(), Some(id(4)));
        assert_eq!(todos.todos()[3].task, "  ");
    }

    #[test]
    fn submit_empty_draft_adds_nothing() {
        let mut todos = LocalTodos::new(Arc::new(sequential_ids()));

        assert_eq!(todos.submit(), None);
        assert!(todos.todos().is_empty());
    }
}
