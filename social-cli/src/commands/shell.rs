//! Shell command - interactive session against an in-memory network
//!
//! Reads one command per line until `quit`, `exit` or end of input. Failed
//! commands are reported and the session keeps going.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use super::session::{help_text, Session};

/// Run the shell on stdin/stdout.
pub fn run(session: &Session, prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && io::stdout().is_terminal();

    if interactive {
        println!(
            "{} Type {} for commands, {} to leave.",
            "social shell".bold(),
            "help".cyan(),
            "quit".cyan()
        );
    }

    let prompt = interactive.then_some(prompt);
    run_loop(session, stdin.lock(), &mut io::stdout(), prompt)
}

/// Drive a session from any line source. `prompt` is printed before each read when set.
pub fn run_loop<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    out: &mut W,
    prompt: Option<&str>,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match line.trim() {
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{}", help_text(session.output().format))?;
                continue;
            }
            _ => {}
        }

        match session.execute_line(&line) {
            None => {}
            Some(Ok(outcome)) => writeln!(out, "{}", session.render(&outcome))?,
            Some(Err(e)) => writeln!(out, "{}", session.render_error(&e, None))?,
        }
    }

    let stats = session.store().read(|store| store.stats());
    tracing::info!(
        users = stats.users,
        friendships = stats.friendships,
        "shell session ended"
    );
    Ok(())
}
