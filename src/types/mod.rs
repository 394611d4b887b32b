//! Shared data types for the graphwalk library.

pub mod error;
pub mod user;

pub use error::{GraphError, GraphResult};
pub use user::{User, UserId};
