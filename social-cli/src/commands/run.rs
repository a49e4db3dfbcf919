//! Run command - execute a script of graph commands
//!
//! One command per line; blank lines and `#` comments are skipped. Every
//! line's result is printed as it runs.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::session::Session;

/// Totals for one script run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Run the script at `script` (`-` reads stdin).
pub fn run(session: &Session, script: &Path, fail_fast: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = if script == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(script)
            .with_context(|| format!("Failed to open script: {}", script.display()))?;
        Box::new(BufReader::new(file))
    };

    let summary = run_lines(session, reader, &mut io::stdout(), fail_fast)?;
    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        "script finished"
    );

    if summary.failed > 0 {
        bail!(
            "{} of {} command(s) failed",
            summary.failed,
            summary.executed
        );
    }
    Ok(())
}

/// Execute every line from `input`, writing each result to `out`.
pub fn run_lines<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    out: &mut W,
    fail_fast: bool,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let line_no = index + 1;

        match session.execute_line(&line) {
            None => continue,
            Some(Ok(outcome)) => {
                summary.executed += 1;
                writeln!(out, "{}", session.render(&outcome))?;
            }
            Some(Err(e)) => {
                summary.executed += 1;
                summary.failed += 1;
                writeln!(out, "{}", session.render_error(&e, Some(line_no)))?;
                if fail_fast {
                    tracing::warn!(line = line_no, "stopping at first failure");
                    break;
                }
            }
        }
    }

    Ok(summary)
}
