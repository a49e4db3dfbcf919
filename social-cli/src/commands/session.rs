//! One in-memory network plus the settings used to present results.
//!
//! The shell, the script runner and `exec` all feed lines through a
//! [`Session`]; they differ only in where lines come from and how failures
//! affect the process.

use colored::Colorize;
use social_core::{Command, GraphError, Outcome, ParseCommandError, SharedGraphStore};

use crate::config::SocialConfig;
use crate::output::{render, ErrorMessage, OutputConfig, OutputFormat, TableDisplay};

/// Usage line and description for every command, in help order.
const USAGE: &[(&str, &str)] = &[
    ("add_user <name>", "Add a user to the network"),
    ("remove_user <name>", "Remove a user and all their friendships"),
    ("add_friend <user1> <user2>", "Make two users friends"),
    ("remove_friend <user1> <user2>", "End a friendship"),
    ("show_friends <name>", "List a user's friends"),
    ("shortest_path <start> <end>", "Shortest chain of friendships"),
    ("recommend <name>", "Suggest friends of friends"),
    ("users", "List all users"),
    ("stats", "Show network counts"),
];

/// A failed line, ready to render.
#[derive(Debug)]
pub enum LineError {
    Parse(ParseCommandError),
    Graph(GraphError),
}

impl LineError {
    pub fn to_message(&self) -> ErrorMessage {
        match self {
            LineError::Parse(e) => ErrorMessage::new("invalid_command", e.to_string()),
            LineError::Graph(e) => ErrorMessage::new(e.kind(), e.to_string()),
        }
    }
}

pub struct Session {
    store: SharedGraphStore,
    output: OutputConfig,
    recommend_limit: Option<usize>,
}

impl Session {
    pub fn new(output: OutputConfig, config: &SocialConfig) -> Self {
        Self {
            store: SharedGraphStore::new(),
            output,
            recommend_limit: config.recommend_limit(),
        }
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn store(&self) -> &SharedGraphStore {
        &self.store
    }

    /// Execute one typed command, applying the configured recommendation limit.
    pub fn execute(&self, command: &Command) -> Result<Outcome, GraphError> {
        tracing::debug!(command = %command, "executing");
        let mut outcome = self.store.execute(command)?;

        if let (
            Outcome::Recommendations {
                recommendations, ..
            },
            Some(limit),
        ) = (&mut outcome, self.recommend_limit)
        {
            recommendations.truncate(limit);
        }
        Ok(outcome)
    }

    /// Parse and execute one line. Blank lines and `#` comments yield `None`.
    pub fn execute_line(&self, line: &str) -> Option<Result<Outcome, LineError>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let result = line
            .parse::<Command>()
            .map_err(LineError::Parse)
            .and_then(|cmd| self.execute(&cmd).map_err(LineError::Graph));

        if let Err(e) = &result {
            tracing::debug!(line, error = ?e, "command failed");
        }
        Some(result)
    }

    pub fn render<T: TableDisplay>(&self, data: &T) -> String {
        render(data, &self.output)
    }

    pub fn render_error(&self, error: &LineError, line: Option<usize>) -> String {
        let message = error.to_message();
        let message = match line {
            Some(n) => message.at_line(n),
            None => message,
        };
        render(&message, &self.output)
    }
}

/// Help text listing every command.
pub fn help_text(format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        let commands: Vec<serde_json::Value> = USAGE
            .iter()
            .map(|(usage, about)| serde_json::json!({ "usage": usage, "about": about }))
            .collect();
        return serde_json::json!({ "commands": commands }).to_string();
    }

    let mut output = format!("{}\n", "Commands:".bold());
    for (usage, about) in USAGE {
        output.push_str(&format!("  {:<32} {}\n", usage.cyan(), about));
    }
    output.push_str(&format!("  {:<32} {}\n", "help".cyan(), "Show this help"));
    output.push_str(&format!("  {:<32} {}", "quit".cyan(), "Leave the shell"));
    output
}
