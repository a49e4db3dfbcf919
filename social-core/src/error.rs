//! Error types for social-core.

use thiserror::Error;

/// Result type alias for graph store operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by [`GraphStore`](crate::GraphStore) operations.
///
/// Every variant is a local, recoverable condition. "No path" and empty
/// result lists are not errors and never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A user with this name is already in the network.
    #[error("{name} already exists")]
    AlreadyExists {
        /// The duplicate name.
        name: String,
    },

    /// No user with this name exists.
    #[error("User not found: {name}")]
    NotFound {
        /// The first missing name, in argument order.
        name: String,
    },

    /// Both sides of a friendship named the same user.
    #[error("{name} cannot be friends with themself")]
    SelfFriendship {
        /// The user named twice.
        name: String,
    },

    /// The two users are already connected.
    #[error("{a} and {b} are already friends")]
    AlreadyFriends { a: String, b: String },

    /// The two users are not connected.
    #[error("{a} and {b} are not friends")]
    NotFriends { a: String, b: String },

    /// An empty or malformed user identity.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was rejected.
        message: String,
    },
}

impl GraphError {
    /// Stable snake_case tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::AlreadyExists { .. } => "already_exists",
            GraphError::NotFound { .. } => "not_found",
            GraphError::SelfFriendship { .. } => "self_friendship",
            GraphError::AlreadyFriends { .. } => "already_friends",
            GraphError::NotFriends { .. } => "not_friends",
            GraphError::InvalidArgument { .. } => "invalid_argument",
        }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        GraphError::NotFound {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::NotFound {
            name: "Alice".to_string(),
        };
        assert_eq!(err.to_string(), "User not found: Alice");

        let err = GraphError::AlreadyFriends {
            a: "Alice".to_string(),
            b: "Bob".to_string(),
        };
        assert!(err.to_string().contains("Alice"));
        assert!(err.to_string().contains("Bob"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(GraphError::not_found("x").kind(), "not_found");
        assert_eq!(
            GraphError::InvalidArgument {
                message: "empty".to_string()
            }
            .kind(),
            "invalid_argument"
        );
    }
}
