//! stdin/stdout front end for the terminal easter egg

use std::time::Instant;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use folio::config::TerminalConfig;
use folio::terminal::{Effect, Outcome, Terminal};

const WELCOME: &str = "Welcome to the terminal! Type 'help' for available commands.";

/// Lines to print after a submission, skipping the echo of the input
fn lines_to_show(terminal: &Terminal, before: usize, outcome: &Outcome) -> Vec<String> {
    let transcript = terminal.transcript();
    match outcome.effect {
        Effect::Cleared => transcript.lines().to_vec(),
        _ => transcript.since(before + 1).to_vec(),
    }
}

/// Run until stdin closes or the view closes after `exit`
pub async fn run(config: &TerminalConfig) -> Result<()> {
    let mut terminal = Terminal::new(config);
    terminal.open();

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    while terminal.is_open() {
        if !terminal.has_pending_close() {
            stdout.write_all(b"$ ").await?;
        }
        stdout.flush().await?;

        let deadline = terminal.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                let before = terminal.transcript().len();
                let outcome = terminal.submit(&line, Instant::now());
                for shown in lines_to_show(&terminal, before, &outcome) {
                    stdout.write_all(format!("{}\n", shown).as_bytes()).await?;
                }
            }
            _ = sleep_until(deadline) => {
                terminal.tick(Instant::now());
            }
        }
    }

    stdout.flush().await?;
    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}
