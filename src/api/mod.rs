use std::{error::Error, path::PathBuf};

use crate::{git::fetcher::GitFetcher, model::RepoName};

mod builder;

pub use builder::RepofetchBuilder;

pub struct Repofetch {
    fetcher: GitFetcher,
}

impl Repofetch {
    pub fn builder() -> RepofetchBuilder {
        RepofetchBuilder::default()
    }

    /// Fetches `name` into the base directory and returns the local path,
    /// optionally pinned to `commit`.
    pub fn fetch(
        &self,
        name: &RepoName,
        branch: &str,
        commit: Option<&str>,
    ) -> Result<PathBuf, Box<dyn Error>> {
        Ok(self.fetcher.fetch_repository(name, branch, commit)?)
    }
}
