//! Todo list demonstrating reducer-driven state next to component-local state.
//!
//! Two stores make up the application: one owns the ordered list of todos,
//! the other owns the active filter. Every change is an [`Action`] routed
//! by [`TodoApp::dispatch`] to the reducer of its family. The list shown to
//! the user is never stored; it is projected from both states on demand.
//!
//! [`LocalTodos`] is the same list kept inside a single component, mutated
//! in place, for comparison.
//!
//! It demonstrates:
//!
//! - Pure reducers (`TodoReducer`, `FilterReducer`) tested with `ReducerTest`
//! - `#[derive(Action)]` wire tags and the `UnrecognizedAction` boundary
//! - A dispatcher serializing actions across two stores
//! - Subscriptions through the store's `watch` channel
//!
//! # Quick Start
//!
//! ```no_run
//! use statecraft_core::SystemIdGenerator;
//! use std::sync::Arc;
//! use todos::{FilterAction, TodoAction, TodoApp};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = TodoApp::seeded(Arc::new(SystemIdGenerator));
//!
//! app.dispatch(TodoAction::AddTodo { task: "Learn Rust".to_string() }).await?;
//! app.dispatch(FilterAction::ShowIncomplete).await?;
//!
//! for todo in app.visible().await {
//!     println!("[ ] {}", todo.task);
//! }
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod app;
pub mod config;
pub mod filter;
pub mod local;
pub mod projection;
pub mod reducer;
pub mod session;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use action::{Action, ActionParseError, FilterAction, TodoAction};
pub use app::{DispatchError, Snapshot, TodoApp};
pub use config::{Config, Variant};
pub use filter::FilterReducer;
pub use local::LocalTodos;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use session::SessionError;
pub use types::{FilterMode, TodoId, TodoItem, TodoList};
pub use ui::{Command, ViewError};
