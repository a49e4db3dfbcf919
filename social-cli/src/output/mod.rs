//! Output formatting module for the social CLI
//!
//! Every command result is rendered either as human-readable text (table)
//! or as one JSON object per line (json), so scripts can consume a session's
//! output line by line.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;
mod network;
mod table;

pub use self::json::JsonOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON lines for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Pretty-print JSON instead of one object per line
    pub pretty: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Builder: multi-line JSON
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

/// Trait for types that can be displayed as text
///
/// JSON rendering comes from `Serialize`; implementors only describe the
/// human-readable form.
pub trait TableDisplay: Serialize {
    /// Convert to table format string
    fn to_table(&self) -> String;
}

/// Render `data` in the configured format.
pub fn render<T: TableDisplay>(data: &T, config: &OutputConfig) -> String {
    match config.format {
        OutputFormat::Table => data.to_table(),
        OutputFormat::Json => JsonOutput::format(data, config),
    }
}

/// Simple error message
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    /// Stable error tag, e.g. `not_found` or `parse`
    pub error: String,
    pub message: String,
    /// Script line the error came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl TableDisplay for ErrorMessage {
    fn to_table(&self) -> String {
        use colored::Colorize;
        match self.line {
            Some(line) => format!("{} line {}: {}", "ERROR:".red().bold(), line, self.message),
            None => format!("{} {}", "ERROR:".red().bold(), self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_error_message_json() {
        let config = OutputConfig::new(OutputFormat::Json);
        let msg = ErrorMessage::new("not_found", "User not found: Bob").at_line(3);
        let out = render(&msg, &config);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "not_found");
        assert_eq!(value["line"], 3);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_error_message_table() {
        colored::control::set_override(false);
        let msg = ErrorMessage::new("parse", "Unknown command: fly");
        assert_eq!(msg.to_table(), "ERROR: Unknown command: fly");
    }
}
