//! Value types returned by graph store queries.

use serde::Serialize;

/// Result of a shortest-path query.
///
/// `NoPath` is a successful answer: both users exist but nothing connects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum PathOutcome {
    /// Names from start to end inclusive.
    Found(Vec<String>),
    NoPath,
}

impl PathOutcome {
    /// Number of friendships traversed, or `None` when unconnected.
    pub fn hops(&self) -> Option<usize> {
        match self {
            PathOutcome::Found(path) => Some(path.len().saturating_sub(1)),
            PathOutcome::NoPath => None,
        }
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPath => None,
        }
    }
}

/// A friend-of-friend candidate ranked by common neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The suggested user.
    pub name: String,
    /// Number of distinct mutual friends.
    pub score: usize,
    /// The mutual friends themselves, sorted by name.
    pub mutual_friends: Vec<String>,
}

/// A user deleted together with its friendships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedUser {
    pub name: String,
    /// Users that were friends with `name`, sorted. One friendship was
    /// dropped per entry.
    pub former_friends: Vec<String>,
}

impl RemovedUser {
    /// Count of friendships removed as a side effect.
    pub fn removed_friendships(&self) -> usize {
        self.former_friends.len()
    }
}

/// Aggregate counts over the whole network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub users: usize,
    pub friendships: usize,
    /// Users with no friends at all.
    pub isolated_users: usize,
}
