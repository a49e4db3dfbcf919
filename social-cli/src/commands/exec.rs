//! Exec command - run a single command against a fresh network
//!
//! Mirrors the one-shot `social <command> <args>` invocation. The network
//! starts empty, so this is mostly useful for checking argument handling.

use anyhow::Result;
use social_core::Command;

use super::session::{LineError, Session};

pub fn run(session: &Session, command: &str, args: &[String]) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = Command::parse(command, &args)
        .map_err(LineError::Parse)
        .and_then(|cmd| session.execute(&cmd).map_err(LineError::Graph));

    match result {
        Ok(outcome) => {
            println!("{}", session.render(&outcome));
            Ok(())
        }
        Err(e) => {
            println!("{}", session.render_error(&e, None));
            std::process::exit(1);
        }
    }
}
