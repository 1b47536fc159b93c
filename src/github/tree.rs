//! Depth-first traversal of a repository's file tree.
//!
//! Directories are expanded inline, in listing order, so the flattened result
//! follows the remote API's ordering exactly. An explicit frame stack replaces
//! recursion; with the depth cap it can never grow past `MAX_DEPTH + 1` frames.

use std::collections::HashSet;
use std::vec::IntoIter;

use tracing::warn;

use crate::github::GitHubClient;
use crate::models::{EntryType, FileEntry};

/// Hard ceiling on directory nesting. Directories deeper than this are
/// silently excluded, not reported as truncated.
pub const MAX_DEPTH: usize = 10;

/// Collect every file entry reachable from the repository root.
///
/// A directory path is recorded as visited before its children are fetched,
/// so a cycle in the remote listing cannot cause the walk to loop. A failed
/// listing drops that subtree only; siblings and already-collected entries
/// are unaffected.
pub async fn walk_tree(client: &GitHubClient, owner: &str, repo: &str) -> Vec<FileEntry> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut files = Vec::new();
    let mut stack: Vec<(IntoIter<FileEntry>, usize)> = Vec::new();

    if let Some(entries) = list_dir(client, owner, repo, "", 0, &mut visited).await {
        stack.push((entries.into_iter(), 0));
    }

    loop {
        let next = match stack.last_mut() {
            Some((iter, depth)) => {
                let depth = *depth;
                iter.next().map(|entry| (entry, depth))
            }
            None => break,
        };

        match next {
            None => {
                stack.pop();
            }
            Some((entry, depth)) => match entry.entry_type {
                EntryType::File => files.push(entry),
                EntryType::Dir => {
                    if let Some(entries) =
                        list_dir(client, owner, repo, &entry.path, depth + 1, &mut visited).await
                    {
                        stack.push((entries.into_iter(), depth + 1));
                    }
                }
                // Symlinks and submodules are neither descended nor reviewed.
                _ => {}
            },
        }
    }

    files
}

/// Termination guards plus one listing request. `None` skips the subtree.
async fn list_dir(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    path: &str,
    depth: usize,
    visited: &mut HashSet<String>,
) -> Option<Vec<FileEntry>> {
    if visited.contains(path) || depth > MAX_DEPTH {
        return None;
    }
    visited.insert(path.to_string());

    match client.list_contents(owner, repo, path).await {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!(path, error = %e, "failed to list directory, dropping subtree");
            None
        }
    }
}
