//! Actions for the todo list and the filter.
//!
//! Each store has its own closed action family. [`Action`] is the umbrella
//! the dispatcher accepts; converting it into a family is the one place an
//! [`UnrecognizedAction`] can surface.
//!
//! On the wire every action is a JSON object tagged by `type`:
//!
//! ```json
//! {"type": "DO_TODO", "id": "5f0c..."}
//! {"type": "ADD_TODO", "task": "Learn Rust"}
//! {"type": "SHOW_INCOMPLETE"}
//! ```

use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use statecraft_core::action::{ActionType, UnrecognizedAction};
use statecraft_macros::Action as ActionTags;
use std::str::FromStr;
use thiserror::Error;

/// Actions handled by the todo list reducer
#[derive(ActionTags, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Mark a todo as done
    DoTodo {
        /// Todo to complete
        id: TodoId,
    },

    /// Mark a todo as not done
    UndoTodo {
        /// Todo to reopen
        id: TodoId,
    },

    /// Append a new, open todo
    AddTodo {
        /// Display text; not validated here
        task: String,
    },
}

/// Actions handled by the filter reducer
#[derive(ActionTags, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    /// Show every todo
    ShowAll,
    /// Show completed todos only
    ShowComplete,
    /// Show open todos only
    ShowIncomplete,
}

/// Any action the application accepts
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Action {
    /// Routed to the todo store
    Todo(TodoAction),
    /// Routed to the filter store
    Filter(FilterAction),
}

impl Action {
    /// The wire tag of the wrapped action
    #[must_use]
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Todo(action) => action.action_type(),
            Self::Filter(action) => action.action_type(),
        }
    }

    /// Parse the JSON form of an action
    ///
    /// # Errors
    ///
    /// - [`ActionParseError::Malformed`]: not JSON, or bad fields for a known `type`
    /// - [`ActionParseError::MissingType`]: no string `type` field
    /// - [`ActionParseError::Unrecognized`]: `type` names no known action
    pub fn from_json(json: &str) -> Result<Self, ActionParseError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let tag = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ActionParseError::MissingType)?;

        if TodoAction::recognizes(tag) {
            Ok(Self::Todo(serde_json::from_value(value)?))
        } else if FilterAction::recognizes(tag) {
            Ok(Self::Filter(serde_json::from_value(value)?))
        } else {
            Err(UnrecognizedAction::new(tag, "todo or filter").into())
        }
    }

    /// Render the JSON form of this action
    ///
    /// # Errors
    ///
    /// Returns [`ActionParseError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ActionParseError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl From<TodoAction> for Action {
    fn from(action: TodoAction) -> Self {
        Self::Todo(action)
    }
}

impl From<FilterAction> for Action {
    fn from(action: FilterAction) -> Self {
        Self::Filter(action)
    }
}

impl TryFrom<Action> for TodoAction {
    type Error = UnrecognizedAction;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        match action {
            Action::Todo(action) => Ok(action),
            Action::Filter(other) => Err(UnrecognizedAction::new(other.action_type(), "todo")),
        }
    }
}

impl TryFrom<Action> for FilterAction {
    type Error = UnrecognizedAction;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        match action {
            Action::Filter(action) => Ok(action),
            Action::Todo(other) => Err(UnrecognizedAction::new(other.action_type(), "filter")),
        }
    }
}

/// Errors from reading an action off the wire
#[derive(Error, Debug)]
pub enum ActionParseError {
    /// The payload is not a well-formed action object
    #[error("malformed action: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The object has no string `type` field
    #[error("malformed action: missing string `type` field")]
    MissingType,

    /// The `type` field names no known action
    #[error(transparent)]
    Unrecognized(#[from] UnrecognizedAction),
}
