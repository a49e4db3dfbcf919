//! Human-readable rendering of graph command outcomes.

use colored::Colorize;
use social_core::{Outcome, PathOutcome};

use super::{TableDisplay, TableOutput};

fn success(message: String) -> String {
    format!("{} {}", "SUCCESS:".green().bold(), message)
}

fn heading(title: String) -> String {
    format!("{}\n{}\n", title.bold(), "-".repeat(40))
}

fn render_path(start: &str, end: &str, outcome: &PathOutcome) -> String {
    let mut output = heading(format!(
        "{} {} {} {}",
        "Path from".bold(),
        start.cyan(),
        "to".bold(),
        end.cyan()
    ));

    match outcome {
        PathOutcome::Found(path) => {
            for (i, name) in path.iter().enumerate() {
                let prefix = if i == 0 {
                    "START".green().to_string()
                } else if i == path.len() - 1 {
                    "END  ".red().to_string()
                } else {
                    format!("{:5}", i)
                };
                output.push_str(&format!("  {} {}\n", prefix, name));

                if i < path.len() - 1 {
                    output.push_str(&format!("        {}\n", "|".dimmed()));
                }
            }
            output.push_str(&format!(
                "\n{}: {} hops",
                "Path length".bold(),
                outcome.hops().unwrap_or(0)
            ));
        }
        PathOutcome::NoPath => {
            output.push_str(&format!("  {} No connection found.", "INFO".yellow()));
        }
    }

    output
}

impl TableDisplay for Outcome {
    fn to_table(&self) -> String {
        match self {
            Outcome::UserAdded { name } => success(format!("{} joined the network!", name)),
            Outcome::UserRemoved(removed) => {
                let detail = if removed.former_friends.is_empty() {
                    "no friendships dropped".to_string()
                } else {
                    format!(
                        "{} friendship(s) dropped: {}",
                        removed.removed_friendships(),
                        removed.former_friends.join(", ")
                    )
                };
                success(format!("User {} removed ({})", removed.name, detail))
            }
            Outcome::FriendAdded { user1, user2 } => {
                success(format!("{} and {} are now friends!", user1, user2))
            }
            Outcome::FriendRemoved { user1, user2 } => {
                success(format!("{} and {} are no longer friends.", user1, user2))
            }
            Outcome::Friends { name, friends } => {
                let mut output = heading(format!("Friends of {}", name.cyan()));
                if friends.is_empty() {
                    output.push_str(&"  No friends yet.".dimmed().to_string());
                } else {
                    for friend in friends {
                        output.push_str(&format!("  {}\n", friend));
                    }
                    output.push_str(&format!("\n{}: {}", "Total".bold(), friends.len()));
                }
                output
            }
            Outcome::Path {
                start,
                end,
                outcome,
            } => render_path(start, end, outcome),
            Outcome::Recommendations {
                name,
                recommendations,
            } => {
                if recommendations.is_empty() {
                    format!("No friend suggestions for {}.", name)
                } else {
                    format!(
                        "{}{}",
                        heading(format!("Suggestions for {}", name.cyan())),
                        TableOutput::recommendations(recommendations)
                    )
                }
            }
            Outcome::Users { users } => {
                let mut output = heading(format!("Users ({})", users.len()));
                if users.is_empty() {
                    output.push_str(&"  The network is empty.".dimmed().to_string());
                } else {
                    output.push_str(&users.join("\n"));
                }
                output
            }
            Outcome::Stats(stats) => format!(
                "{}{}",
                heading("Network".to_string()),
                TableOutput::key_value(&[
                    ("Users", stats.users.to_string()),
                    ("Friendships", stats.friendships.to_string()),
                    ("Isolated users", stats.isolated_users.to_string()),
                ])
            ),
        }
    }
}
