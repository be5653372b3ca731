//! Line-oriented text interface.
//!
//! Parses what the user types into a [`Command`], turns commands into
//! actions the same way the buttons and inputs of a graphical list would,
//! and renders the visible todos as numbered lines.

use crate::action::{Action, FilterAction, TodoAction};
use crate::local::LocalTodos;
use crate::types::{FilterMode, TodoItem};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  toggle N       flip item N of the list shown
  do N           mark item N done
  undo N         mark item N not done
  add TEXT       append a new item
  show MODE      all | complete | incomplete
  list           print the list again
  {\"type\":...}   dispatch a raw JSON action
  help           print this text
  quit           leave";

/// Errors from reading or applying a typed command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The first word is not a known command
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    /// The command needs an argument that was not given
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// The item number is not a positive integer
    #[error("`{0}` is not an item number")]
    InvalidIndex(String),

    /// The item number is past the end of the list shown
    #[error("there is no item {0}")]
    NoSuchItem(usize),

    /// `show` was given something other than a filter name
    #[error("unknown filter `{0}` (expected all, complete or incomplete)")]
    UnknownFilter(String),
}

/// One line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip the item at this 1-based position
    Toggle(usize),
    /// Complete the item at this 1-based position
    Do(usize),
    /// Reopen the item at this 1-based position
    Undo(usize),
    /// Add an item with this text; empty text adds nothing
    Add(String),
    /// Change the filter
    Show(FilterMode),
    /// An action in its JSON form, passed through untouched
    Raw(String),
    /// Print the list
    List,
    /// Print usage
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one line of input
    ///
    /// The text of `add` is everything after the single separator that
    /// follows the word, kept exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] for unknown words, missing arguments and
    /// malformed item numbers.
    pub fn parse(line: &str) -> Result<Self, ViewError> {
        let line = line.trim_start();
        if line.starts_with('{') {
            return Ok(Self::Raw(line.trim_end().to_string()));
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));
        let arg = rest.trim();

        match word {
            "toggle" => parse_index("toggle", arg).map(Self::Toggle),
            "do" => parse_index("do", arg).map(Self::Do),
            "undo" => parse_index("undo", arg).map(Self::Undo),
            "add" => Ok(Self::Add(rest.to_string())),
            "show" => parse_mode(arg).map(Self::Show),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ViewError::UnknownCommand(other.to_string())),
        }
    }

    /// The action this command stands for, given the items currently shown
    ///
    /// Toggling a done item undoes it; toggling an open one does it.
    /// `add` with no text at all, and commands that only read, yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NoSuchItem`] if the position is past the end of
    /// `visible`.
    pub fn intent(&self, visible: &[TodoItem]) -> Result<Option<Action>, ViewError> {
        let action: Action = match self {
            Self::Toggle(n) => {
                let todo = item_at(visible, *n)?;
                if todo.complete {
                    TodoAction::UndoTodo { id: todo.id }.into()
                } else {
                    TodoAction::DoTodo { id: todo.id }.into()
                }
            }
            Self::Do(n) => TodoAction::DoTodo {
                id: item_at(visible, *n)?.id,
            }
            .into(),
            Self::Undo(n) => TodoAction::UndoTodo {
                id: item_at(visible, *n)?.id,
            }
            .into(),
            Self::Add(task) if task.is_empty() => return Ok(None),
            Self::Add(task) => TodoAction::AddTodo { task: task.clone() }.into(),
            Self::Show(mode) => FilterAction::from(*mode).into(),
            Self::Raw(_) | Self::List | Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(action))
    }
}

impl FromStr for Command {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_index(command: &'static str, arg: &str) -> Result<usize, ViewError> {
    if arg.is_empty() {
        return Err(ViewError::MissingArgument(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ViewError::InvalidIndex(arg.to_string())),
    }
}

fn parse_mode(arg: &str) -> Result<FilterMode, ViewError> {
    if arg.is_empty() {
        return Err(ViewError::MissingArgument("show"));
    }
    FilterMode::MODES
        .into_iter()
        .find(|mode| mode.as_str() == arg)
        .ok_or_else(|| ViewError::UnknownFilter(arg.to_string()))
}

fn item_at(items: &[TodoItem], n: usize) -> Result<&TodoItem, ViewError> {
    n.checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(ViewError::NoSuchItem(n))
}

/// Numbered listing of todos under a header
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    header: Header<'a>,
    items: &'a [TodoItem],
}

#[derive(Clone, Copy, Debug)]
enum Header<'a> {
    Filter(FilterMode),
    Draft(&'a str),
}

impl<'a> View<'a> {
    /// Visible items under the active filter
    #[must_use]
    pub const fn filtered(items: &'a [TodoItem], mode: FilterMode) -> Self {
        Self {
            header: Header::Filter(mode),
            items,
        }
    }

    /// Every item of a [`LocalTodos`], with its draft
    #[must_use]
    pub fn local(todos: &'a LocalTodos) -> Self {
        Self {
            header: Header::Draft(todos.draft()),
            items: todos.todos(),
        }
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.header {
            Header::Filter(mode) => writeln!(f, "showing {mode} ({})", self.items.len())?,
            Header::Draft(draft) => writeln!(f, "draft: {draft:?}")?,
        }

        if self.items.is_empty() {
            return write!(f, "  (nothing to show)");
        }

        for (n, todo) in (1..).zip(self.items) {
            if n > 1 {
                writeln!(f)?;
            }
            let mark = if todo.complete { 'x' } else { ' ' };
            write!(f, "{n:>3}. [{mark}] {}", todo.task)?;
        }
        Ok(())
    }
}

/// Render the visible items under the active filter
#[must_use]
pub fn render(items: &[TodoItem], mode: FilterMode) -> String {
    View::filtered(items, mode).to_string()
}

/// Render a [`LocalTodos`]
#[must_use]
pub fn render_local(todos: &LocalTodos) -> String {
    View::local(todos).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{TodoId, TodoList};
    use statecraft_testing::sequential_ids;
    use uuid::Uuid;

    fn id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    fn seed() -> Vec<TodoItem> {
        TodoList::seed(&sequential_ids()).as_slice().to_vec()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("toggle 2"), Ok(Command::Toggle(2)));
        assert_eq!(Command::parse("  do 1 "), Ok(Command::Do(1)));
        assert_eq!(Command::parse("undo 3"), Ok(Command::Undo(3)));
        assert_eq!(
            Command::parse("add Learn Rust  fast"),
            Ok(Command::Add("Learn Rust  fast".into()))
        );
        assert_eq!(Command::parse("add"), Ok(Command::Add(String::new())));
        assert_eq!(
            Command::parse("show incomplete"),
            Ok(Command::Show(FilterMode::Incomplete))
        );
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(
            "{\"type\":\"SHOW_ALL\"}".parse::<Command>(),
            Ok(Command::Raw("{\"type\":\"SHOW_ALL\"}".into()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Command::parse("delete 1"),
            Err(ViewError::UnknownCommand("delete".into()))
        );
        assert_eq!(Command::parse("do"), Err(ViewError::MissingArgument("do")));
        assert_eq!(
            Command::parse("do 0"),
            Err(ViewError::InvalidIndex("0".into()))
        );
        assert_eq!(
            Command::parse("toggle two"),
            Err(ViewError::InvalidIndex("two".into()))
        );
        assert_eq!(
            Command::parse("show done"),
            Err(ViewError::UnknownFilter("done".into()))
        );
    }

    #[test]
    fn toggle_picks_action_from_completion() {
        let items = seed();

        assert_eq!(
            Command::Toggle(1).intent(&items),
            Ok(Some(TodoAction::UndoTodo { id: id(1) }.into()))
        );
        assert_eq!(
            Command::Toggle(3).intent(&items),
            Ok(Some(TodoAction::DoTodo { id: id(3) }.into()))
        );
    }

    #[test]
    fn index_is_into_visible_items() {
        let items = seed();
        let open: Vec<_> = items.iter().filter(|t| !t.complete).cloned().collect();

        assert_eq!(
            Command::Do(1).intent(&open),
            Ok(Some(TodoAction::DoTodo { id: id(3) }.into()))
        );
        assert_eq!(Command::Do(2).intent(&open), Err(ViewError::NoSuchItem(2)));
    }

    #[test]
    fn add_keeps_text_as_typed() {
        assert_eq!(
            "add  Learn Rust ".parse::<Command>(),
            Ok(Command::Add(" Learn Rust ".into()))
        );
        assert_eq!(Command::parse("add   "), Ok(Command::Add("  ".into())));
        assert_eq!(Command::parse("add "), Ok(Command::Add(String::new())));
    }

    #[test]
    fn only_empty_add_yields_no_action() {
        assert_eq!(Command::Add(String::new()).intent(&[]), Ok(None));
        assert_eq!(
            Command::Add("   ".into()).intent(&[]),
            Ok(Some(TodoAction::AddTodo { task: "   ".into() }.into()))
        );
        assert_eq!(
            Command::Add("Learn Rust".into()).intent(&[]),
            Ok(Some(
                TodoAction::AddTodo {
                    task: "Learn Rust".into()
                }
                .into()
            ))
        );
    }

    #[test]
    fn show_yields_filter_action() {
        assert_eq!(
            Command::Show(FilterMode::Complete).intent(&[]),
            Ok(Some(FilterAction::ShowComplete.into()))
        );
        assert_eq!(Command::List.intent(&[]), Ok(None));
    }

    #[test]
    fn renders_numbered_lines() {
        let rendered = render(&seed(), FilterMode::All);
        assert_eq!(
            rendered,
            "showing all (3)\n  1. [x] Learn React\n  2. [x] Learn Firebase\n  3. [ ] Learn GraphQL"
        );
    }

    #[test]
    fn renders_empty_view() {
        assert_eq!(
            render(&[], FilterMode::Complete),
            "showing complete (0)\n  (nothing to show)"
        );
    }

    #[test]
    fn renders_local_draft() {
        let mut todos = LocalTodos::new(std::sync::Arc::new(sequential_ids()));
        todos.set_draft("Learn");
        assert_eq!(render_local(&todos), "draft: \"Learn\"\n  (nothing to show)");
    }
}
