use std::{env, error::Error, path::PathBuf};

use crate::{config::RepofetchConfig, git::fetcher::GitFetcher, Repofetch};

#[derive(Default)]
pub struct RepofetchBuilder {
    tmp_dir: Option<PathBuf>,
}

impl RepofetchBuilder {
    /// Base directory where fetched repositories are placed.
    ///
    /// Defaults to `REPOFETCH_TMP_DIR`, falling back to `repofetch` under the
    /// system temporary directory.
    pub fn tmp_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.tmp_dir = Some(path.into());
        self
    }

    pub fn try_build(self) -> Result<Repofetch, Box<dyn Error>> {
        let config = RepofetchConfig::load()?;

        let tmp_dir = self
            .tmp_dir
            .or(config.tmp_dir)
            .unwrap_or_else(default_tmp_dir);

        let fetcher = GitFetcher::new(tmp_dir)?;

        Ok(Repofetch { fetcher })
    }
}

fn default_tmp_dir() -> PathBuf {
    env::temp_dir().join("repofetch")
}
