//! User records for the friendship network.

use std::fmt;

/// Sequentially assigned user identifier. Ids start at 1.
pub type UserId = u64;

/// A user in the friendship network. Identity lives in the id the network
/// assigns; the record itself only carries a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a new user with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
