//! GitHub integration - link parsing, contents API client, tree traversal.
//!
//! - `link`: extract (owner, repo) from a repository URL
//! - `client`: reqwest client for directory listings and raw downloads
//! - `tree`: depth-first walk of a repository's file tree

pub mod client;
pub mod link;
pub mod tree;

pub use client::GitHubClient;
pub use link::parse_repo_link;
pub use tree::walk_tree;
