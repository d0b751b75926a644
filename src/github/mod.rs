// GitHub API module.
// Provides the client, wire types, and the profile source used by the resolver.

pub mod client;
pub mod endpoints;
pub mod source;
pub mod types;

pub use client::GitHubClient;
pub use source::{GitHubSource, OfflineSource, ProfileSource};
pub use types::*;
