//! Social graph engine - users, friendships and structural queries.
//!
//! This crate keeps a social network as an in-memory undirected graph and
//! answers questions about it.
//!
//! # Features
//!
//! - **Consistent mutation**: no dangling, duplicate or self friendships; removing
//!   a user drops its friendships in the same step
//! - **Shortest paths**: BFS over friendships with deterministic tie-breaking
//! - **Recommendations**: friends-of-friends ranked by mutual friend count
//! - **Command interface**: parse `name arg...` lines into typed commands
//! - **Shared access**: an `RwLock` handle for concurrent hosts
//!
//! # Usage
//!
//! ```
//! use social_core::GraphStore;
//!
//! let mut store = GraphStore::new();
//! for name in ["Alice", "Bob", "Carol"] {
//!     store.add_user(name).unwrap();
//! }
//! store.add_friend("Alice", "Bob").unwrap();
//! store.add_friend("Bob", "Carol").unwrap();
//!
//! let path = store.shortest_path("Alice", "Carol").unwrap();
//! assert_eq!(path.hops(), Some(2));
//!
//! let recs = store.recommend("Alice").unwrap();
//! assert_eq!(recs[0].name, "Carol");
//! assert_eq!(recs[0].score, 1);
//! ```

pub mod command;
pub mod error;
pub mod shared;
pub mod store;
pub mod types;

pub use command::{Command, Outcome, ParseCommandError, COMMAND_NAMES};
pub use error::{GraphError, Result};
pub use shared::SharedGraphStore;
pub use store::GraphStore;
pub use types::{NetworkStats, PathOutcome, Recommendation, RemovedUser};
