//! Interactive text interface for the todo list.
//!
//! Reads one command per line from stdin and prints the list after each.
//! `TODOS_VARIANT=local` runs the component-local list instead of the
//! reducer-driven one.

use statecraft_core::{IdGenerator, SystemIdGenerator};
use statecraft_runtime::metrics::describe_metrics;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::task::JoinHandle;
use todos::{Config, LocalTodos, TodoApp, TodoList, Variant, session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    describe_metrics();
    tracing::info!(variant = ?config.variant, seed = config.seed, "Starting todos");

    let ids: Arc<dyn IdGenerator> = Arc::new(SystemIdGenerator);
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();

    match config.variant {
        Variant::Reducer => {
            let app = if config.seed {
                TodoApp::seeded(ids)
            } else {
                TodoApp::new(TodoList::new(), ids)
            };
            let observer = observe(&app);
            let result = session::run(&app, input, &mut output).await;
            app.close();
            observer.abort();
            result?;
        }
        Variant::Local => {
            let mut todos = if config.seed {
                LocalTodos::seeded(ids)
            } else {
                LocalTodos::new(ids)
            };
            session::run_local(&mut todos, input, &mut output).await?;
        }
    }

    Ok(())
}

/// Log every new list published by the todo store
fn observe(app: &TodoApp) -> JoinHandle<()> {
    let mut changes = app.todo_store().subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let (total, complete) = {
                let todos = changes.borrow_and_update();
                (todos.len(), todos.completed_count())
            };
            tracing::info!(total, complete, "Todo list changed");
        }
    })
}
