//! In-memory social graph powered by petgraph.
//!
//! Users are nodes of an undirected `StableGraph`, friendships are edges.
//! Stable indices mean removing a user never renumbers the others, and
//! `remove_node` drops every incident edge in the same call, so a cascading
//! delete is a single step on the graph.
//!
//! # Key Features
//!
//! - **Symmetric by construction**: one undirected edge per friendship
//! - **O(degree) neighbor expansion** for `show_friends`, BFS and ranking
//! - **Deterministic output**: results are sorted by name at the query boundary

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::types::{NetworkStats, PathOutcome, Recommendation, RemovedUser};

/// Owner of all users and friendships in one network.
///
/// Holds an in-memory undirected graph where:
/// - Nodes are user names (case-sensitive, unique)
/// - Edges are friendships (no weight, no self-loops, no duplicates)
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    graph: StableUnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

/// Reject empty or whitespace-padded identities.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GraphError::InvalidArgument {
            message: "user name must not be empty".to_string(),
        });
    }
    if name.trim() != name {
        return Err(GraphError::InvalidArgument {
            message: format!("user name '{}' has surrounding whitespace", name),
        });
    }
    Ok(())
}

impl GraphStore {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new user.
    ///
    /// Fails with `AlreadyExists` instead of ignoring a duplicate.
    pub fn add_user(&mut self, name: &str) -> Result<String> {
        validate_name(name)?;
        if self.index.contains_key(name) {
            return Err(GraphError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        tracing::debug!(user = name, "user added");
        Ok(name.to_string())
    }

    /// Remove a user together with every friendship it takes part in.
    pub fn remove_user(&mut self, name: &str) -> Result<RemovedUser> {
        let idx = self.node(name)?;
        let former_friends = self.sorted_names(self.graph.neighbors(idx));

        self.graph.remove_node(idx);
        self.index.remove(name);
        tracing::debug!(
            user = name,
            removed_friendships = former_friends.len(),
            "user removed"
        );

        Ok(RemovedUser {
            name: name.to_string(),
            former_friends,
        })
    }

    /// Connect two existing, distinct users.
    pub fn add_friend(&mut self, a: &str, b: &str) -> Result<(String, String)> {
        let (ia, ib) = self.pair(a, b)?;
        if ia == ib {
            return Err(GraphError::SelfFriendship {
                name: a.to_string(),
            });
        }
        if self.graph.find_edge(ia, ib).is_some() {
            return Err(GraphError::AlreadyFriends {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        self.graph.add_edge(ia, ib, ());
        tracing::debug!(a, b, "friendship added");
        Ok((a.to_string(), b.to_string()))
    }

    /// Disconnect two users.
    pub fn remove_friend(&mut self, a: &str, b: &str) -> Result<(String, String)> {
        let (ia, ib) = self.pair(a, b)?;
        let edge = self
            .graph
            .find_edge(ia, ib)
            .ok_or_else(|| GraphError::NotFriends {
                a: a.to_string(),
                b: b.to_string(),
            })?;

        self.graph.remove_edge(edge);
        tracing::debug!(a, b, "friendship removed");
        Ok((a.to_string(), b.to_string()))
    }

    /// Direct friends of `name`, sorted lexicographically.
    pub fn show_friends(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.node(name)?;
        Ok(self.sorted_names(self.graph.neighbors(idx)))
    }

    /// Find the shortest chain of friendships from `start` to `end`.
    ///
    /// Uses BFS (unweighted): O(V + E). Neighbors of each dequeued user are
    /// expanded in name order, so among equally short paths the result is
    /// always the same one.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathOutcome> {
        let (start_idx, end_idx) = self.pair(start, end)?;

        if start_idx == end_idx {
            return Ok(PathOutcome::Found(vec![start.to_string()]));
        }

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::new();

        visited.insert(start_idx);
        queue.push_back(start_idx);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.sorted_neighbors(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                parent.insert(neighbor, current);

                if neighbor == end_idx {
                    let mut path = vec![self.graph[end_idx].clone()];
                    let mut curr = end_idx;
                    while let Some(&p) = parent.get(&curr) {
                        path.push(self.graph[p].clone());
                        curr = p;
                    }
                    path.reverse();
                    return Ok(PathOutcome::Found(path));
                }

                queue.push_back(neighbor);
            }
        }

        Ok(PathOutcome::NoPath)
    }

    /// Rank friends-of-friends by how many mutual friends they share with `name`.
    ///
    /// Direct friends and `name` itself are never suggested. Ordered by
    /// descending score, ties broken by name.
    pub fn recommend(&self, name: &str) -> Result<Vec<Recommendation>> {
        let idx = self.node(name)?;
        let direct: HashSet<NodeIndex> = self.graph.neighbors(idx).collect();

        let mut via: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();
        for &friend in &direct {
            for candidate in self.graph.neighbors(friend) {
                if candidate == idx || direct.contains(&candidate) {
                    continue;
                }
                via.entry(candidate).or_default().push(friend);
            }
        }

        let mut recommendations: Vec<Recommendation> = via
            .into_iter()
            .map(|(candidate, mutual)| {
                let mutual_friends = self.sorted_names(mutual);
                Recommendation {
                    name: self.graph[candidate].clone(),
                    score: mutual_friends.len(),
                    mutual_friends,
                }
            })
            .collect();

        recommendations.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        Ok(recommendations)
    }

    /// Friends shared by `a` and `b`, sorted.
    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<Vec<String>> {
        let (ia, ib) = self.pair(a, b)?;
        let of_a: HashSet<NodeIndex> = self.graph.neighbors(ia).collect();
        Ok(self.sorted_names(self.graph.neighbors(ib).filter(|n| of_a.contains(n))))
    }

    /// Check if a user exists.
    pub fn has_user(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Check if two users are directly connected. Unknown users are never friends.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Get the number of users.
    pub fn user_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of friendships.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All user names, sorted.
    pub fn users(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Every friendship once, as `(lesser, greater)` name pairs, sorted.
    pub fn friendships(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| {
                let (a, b) = (&self.graph[a], &self.graph[b]);
                if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .collect();
        pairs.sort();
        pairs
    }

    pub fn stats(&self) -> NetworkStats {
        let isolated_users = self
            .graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .count();

        NetworkStats {
            users: self.user_count(),
            friendships: self.friendship_count(),
            isolated_users,
        }
    }

    /// Resolve a validated name to its node.
    fn node(&self, name: &str) -> Result<NodeIndex> {
        validate_name(name)?;
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::not_found(name))
    }

    /// Resolve two names, reporting the first missing one.
    fn pair(&self, a: &str, b: &str) -> Result<(NodeIndex, NodeIndex)> {
        validate_name(a)?;
        validate_name(b)?;
        Ok((self.node(a)?, self.node(b)?))
    }

    fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        neighbors
    }

    fn sorted_names(&self, nodes: impl IntoIterator<Item = NodeIndex>) -> Vec<String> {
        let mut names: Vec<String> = nodes
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect();
        names.sort();
        names
    }
}
