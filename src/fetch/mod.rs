mod git;

use std::path::PathBuf;

use crate::model::RepoName;

/// Capability to make a remote repository available in a local folder.
pub trait Fetcher {
    /// Fetches `name` and returns the local path, with the working tree at
    /// the tip of `branch`, or at `commit` when one is given.
    fn fetch(
        &self,
        name: &RepoName,
        branch: &str,
        commit: Option<&str>,
    ) -> anyhow::Result<PathBuf>;
}
