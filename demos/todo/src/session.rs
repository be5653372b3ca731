//! Interactive sessions over any line source.
//!
//! A session reads one command per line, applies it, and writes the list
//! after each change. Bad input is reported on the output and skipped;
//! only an action type nothing recognizes ends a session early.

use crate::app::{DispatchError, TodoApp};
use crate::local::LocalTodos;
use crate::ui::{self, Command, HELP, ViewError};
use statecraft_runtime::StoreError;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Errors that end a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A raw action could not be handled by any store
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A store refused a typed command
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Run a session against the reducer-driven list
///
/// Returns at `quit` or end of input.
///
/// # Errors
///
/// Returns [`SessionError::Dispatch`] for a raw action whose type no store
/// recognizes; nothing after that line is read. I/O failures and closed
/// stores also end the session.
pub async fn run<R, W>(app: &TodoApp, input: R, output: &mut W) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = LineReader::new(input);
    print_app(app, output).await?;

    while let Some(line) = lines.next(output).await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::List => {}
            Command::Raw(json) => match app.dispatch_json(&json).await {
                Ok(()) => {}
                Err(error) if error.is_unrecognized() => {
                    tracing::error!(%error, "Unrecognized action, ending session");
                    return Err(error.into());
                }
                Err(error) => {
                    writeln!(output, "{error}")?;
                    continue;
                }
            },
            command => {
                let visible = app.visible().await;
                match command.intent(&visible) {
                    Ok(Some(action)) => app.dispatch(action).await?,
                    Ok(None) => {}
                    Err(error) => {
                        writeln!(output, "{error}")?;
                        continue;
                    }
                }
            }
        }

        print_app(app, output).await?;
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Run a session against the component-local list
///
/// Items are numbered over the whole list since this variant has no filter.
///
/// # Errors
///
/// Returns [`SessionError::Io`] if reading input or writing output fails.
pub async fn run_local<R, W>(
    todos: &mut LocalTodos,
    input: R,
    output: &mut W,
) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = LineReader::new(input);
    writeln!(output, "{}", ui::render_local(todos))?;

    while let Some(line) = lines.next(output).await? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Ok(Command::List) => {}
            Ok(Command::Toggle(n)) => match n
                .checked_sub(1)
                .and_then(|i| todos.todos().get(i))
                .map(|todo| todo.id)
            {
                Some(id) => {
                    todos.toggle(&id);
                }
                None => {
                    writeln!(output, "{}", ViewError::NoSuchItem(n))?;
                    continue;
                }
            },
            Ok(Command::Add(task)) => {
                todos.set_draft(task);
                todos.submit();
            }
            Ok(_) => {
                writeln!(
                    output,
                    "the local list only understands toggle, add, list, help and quit"
                )?;
                continue;
            }
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        }

        writeln!(output, "{}", ui::render_local(todos))?;
    }

    tracing::info!("Session ended");
    Ok(())
}

async fn print_app<W: Write>(app: &TodoApp, output: &mut W) -> std::io::Result<()> {
    let snapshot = app.snapshot().await;
    writeln!(output, "{}", ui::render(&snapshot.visible(), snapshot.filter))
}

/// Non-blank input lines with their terminator stripped
struct LineReader<R> {
    input: R,
    buf: Vec<u8>,
    number: usize,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    const fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
            number: 0,
        }
    }

    /// The next line that is valid UTF-8 and not blank
    ///
    /// Lines that are not UTF-8 are reported on `output` and skipped.
    async fn next<W: Write>(&mut self, output: &mut W) -> std::io::Result<Option<String>> {
        loop {
            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf).await? == 0 {
                return Ok(None);
            }
            self.number += 1;

            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
            }

            match std::str::from_utf8(&self.buf) {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => return Ok(Some(line.to_string())),
                Err(error) => {
                    tracing::warn!(line = self.number, %error, "Skipping input that is not UTF-8");
                    writeln!(output, "line {} is not valid UTF-8", self.number)?;
                }
            }
        }
    }
}
