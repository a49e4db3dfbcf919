//! Command-style interface over a [`GraphStore`].
//!
//! A command is a name plus zero or more string arguments, the same shape a
//! dispatch layer forwards from a request. Parsing trims arguments and checks
//! arity before anything touches the store.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{GraphError, Result};
use crate::store::GraphStore;
use crate::types::{NetworkStats, PathOutcome, Recommendation, RemovedUser};

/// Names accepted by [`Command::parse`], in help order.
pub const COMMAND_NAMES: &[&str] = &[
    "add_user",
    "remove_user",
    "add_friend",
    "remove_friend",
    "show_friends",
    "shortest_path",
    "recommend",
    "users",
    "stats",
];

/// Reasons a command line could not be turned into a [`Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("No command provided")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{command}: argument {position} is empty")]
    EmptyArgument {
        command: &'static str,
        position: usize,
    },
}

/// One operation against the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUser { name: String },
    RemoveUser { name: String },
    AddFriend { user1: String, user2: String },
    RemoveFriend { user1: String, user2: String },
    ShowFriends { name: String },
    ShortestPath { start: String, end: String },
    Recommend { name: String },
    /// List every user.
    Users,
    /// Network-wide counts.
    Stats,
}

/// Successful result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    UserAdded {
        name: String,
    },
    UserRemoved(RemovedUser),
    FriendAdded {
        user1: String,
        user2: String,
    },
    FriendRemoved {
        user1: String,
        user2: String,
    },
    Friends {
        name: String,
        friends: Vec<String>,
    },
    Path {
        start: String,
        end: String,
        #[serde(flatten)]
        outcome: PathOutcome,
    },
    Recommendations {
        name: String,
        recommendations: Vec<Recommendation>,
    },
    Users {
        users: Vec<String>,
    },
    Stats(NetworkStats),
}

/// Trim every argument and require exactly `N` non-empty ones.
fn take_args<const N: usize>(
    command: &'static str,
    args: &[&str],
) -> std::result::Result<[String; N], ParseCommandError> {
    if args.len() != N {
        return Err(ParseCommandError::WrongArity {
            command,
            expected: N,
            got: args.len(),
        });
    }

    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (position, (slot, arg)) in out.iter_mut().zip(args).enumerate() {
        let trimmed = arg.trim();
        if trimmed.is_empty() {
            return Err(ParseCommandError::EmptyArgument {
                command,
                position: position + 1,
            });
        }
        *slot = trimmed.to_string();
    }
    Ok(out)
}

impl Command {
    /// Build a command from its name and raw arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use social_core::Command;
    ///
    /// let cmd = Command::parse("add_friend", &["Alice", " Bob "]).unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::AddFriend { user1: "Alice".into(), user2: "Bob".into() }
    /// );
    /// ```
    pub fn parse(name: &str, args: &[&str]) -> std::result::Result<Self, ParseCommandError> {
        let cmd = match name.trim() {
            "" => return Err(ParseCommandError::Empty),
            "add_user" => {
                let [name] = take_args::<1>("add_user", args)?;
                Command::AddUser { name }
            }
            "remove_user" => {
                let [name] = take_args::<1>("remove_user", args)?;
                Command::RemoveUser { name }
            }
            "add_friend" => {
                let [user1, user2] = take_args::<2>("add_friend", args)?;
                Command::AddFriend { user1, user2 }
            }
            "remove_friend" => {
                let [user1, user2] = take_args::<2>("remove_friend", args)?;
                Command::RemoveFriend { user1, user2 }
            }
            "show_friends" => {
                let [name] = take_args::<1>("show_friends", args)?;
                Command::ShowFriends { name }
            }
            "shortest_path" => {
                let [start, end] = take_args::<2>("shortest_path", args)?;
                Command::ShortestPath { start, end }
            }
            "recommend" => {
                let [name] = take_args::<1>("recommend", args)?;
                Command::Recommend { name }
            }
            "users" => {
                let [] = take_args::<0>("users", args)?;
                Command::Users
            }
            "stats" => {
                let [] = take_args::<0>("stats", args)?;
                Command::Stats
            }
            other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }

    /// The command's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddUser { .. } => "add_user",
            Command::RemoveUser { .. } => "remove_user",
            Command::AddFriend { .. } => "add_friend",
            Command::RemoveFriend { .. } => "remove_friend",
            Command::ShowFriends { .. } => "show_friends",
            Command::ShortestPath { .. } => "shortest_path",
            Command::Recommend { .. } => "recommend",
            Command::Users => "users",
            Command::Stats => "stats",
        }
    }

    /// Whether executing this command changes the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AddUser { .. }
                | Command::RemoveUser { .. }
                | Command::AddFriend { .. }
                | Command::RemoveFriend { .. }
        )
    }

    /// Run any command against the store.
    pub fn execute(&self, store: &mut GraphStore) -> Result<Outcome> {
        match self {
            Command::AddUser { name } => Ok(Outcome::UserAdded {
                name: store.add_user(name)?,
            }),
            Command::RemoveUser { name } => Ok(Outcome::UserRemoved(store.remove_user(name)?)),
            Command::AddFriend { user1, user2 } => {
                let (user1, user2) = store.add_friend(user1, user2)?;
                Ok(Outcome::FriendAdded { user1, user2 })
            }
            Command::RemoveFriend { user1, user2 } => {
                let (user1, user2) = store.remove_friend(user1, user2)?;
                Ok(Outcome::FriendRemoved { user1, user2 })
            }
            _ => self.query(store),
        }
    }

    /// Run a read-only command. Mutations are rejected without touching the store.
    pub fn query(&self, store: &GraphStore) -> Result<Outcome> {
        match self {
            Command::ShowFriends { name } => Ok(Outcome::Friends {
                friends: store.show_friends(name)?,
                name: name.clone(),
            }),
            Command::ShortestPath { start, end } => Ok(Outcome::Path {
                outcome: store.shortest_path(start, end)?,
                start: start.clone(),
                end: end.clone(),
            }),
            Command::Recommend { name } => Ok(Outcome::Recommendations {
                recommendations: store.recommend(name)?,
                name: name.clone(),
            }),
            Command::Users => Ok(Outcome::Users {
                users: store.users(),
            }),
            Command::Stats => Ok(Outcome::Stats(store.stats())),
            mutation => Err(GraphError::InvalidArgument {
                message: format!("{} modifies the network and needs write access", mutation.name()),
            }),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a whitespace-separated line such as `add_friend Alice Bob`.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = parts.collect();
        Command::parse(name, &args)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddUser { name }
            | Command::RemoveUser { name }
            | Command::ShowFriends { name }
            | Command::Recommend { name } => write!(f, "{} {}", self.name(), name),
            Command::AddFriend { user1, user2 } | Command::RemoveFriend { user1, user2 } => {
                write!(f, "{} {} {}", self.name(), user1, user2)
            }
            Command::ShortestPath { start, end } => write!(f, "{} {} {}", self.name(), start, end),
            Command::Users | Command::Stats => f.write_str(self.name()),
        }
    }
}
