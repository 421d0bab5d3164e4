//! Terminal front end for the todo list.
//!
//! Reads one command per line from stdin, dispatches it through the
//! bindings, and prints the screen after every change.

use composable_todo_runtime::StoreConfig;
use std::io::{self, BufRead, Write};
use todo_list::command::HELP;
use todo_list::{Bindings, Command, TodoEnvironment, app_store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_list=info,composable_todo_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let store = app_store(
        TodoEnvironment::live(),
        StoreConfig::default().with_log_transitions(true),
    );
    let bindings = Bindings::new(&store);

    tracing::info!(
        log_transitions = store.config().log_transitions,
        "Todo list started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", bindings.view())?;
    writeln!(stdout, "{HELP}")?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                writeln!(stdout, "error: {error}")?;
                continue;
            },
        };

        match command {
            Command::Add(text) => {
                if let Err(error) = bindings.add_todo(&text) {
                    writeln!(stdout, "error: {error}")?;
                    continue;
                }
            },
            Command::Type(text) => {
                bindings.change_draft(text);
            },
            Command::Submit => {
                bindings.submit_draft();
            },
            Command::Toggle(id) => {
                bindings.toggle_complete(id);
            },
            Command::Remove(id) => {
                bindings.remove_todo(id);
            },
            Command::CompleteAll => {
                bindings.complete_all();
            },
            Command::RemoveCompleted => {
                bindings.remove_completed();
            },
            Command::Json => {
                let state = store.state();
                writeln!(stdout, "{}", serde_json::to_string_pretty(&*state)?)?;
                continue;
            },
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            },
            Command::Quit => break,
        }

        writeln!(stdout, "\n{}\n", bindings.view())?;
        stdout.flush()?;
    }

    tracing::info!("Todo list closed");
    Ok(())
}
