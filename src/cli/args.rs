use std::path::PathBuf;

use clap::Parser;

use crate::model::RepoName;

/// Fetches a remote git repository into a local working directory.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    /// Repository to fetch, as host and path, e.g. example.com/org/repo
    pub name: RepoName,
    /// Branch to clone
    #[clap(short, long, default_value = "main")]
    pub branch: String,
    /// Commit hash to check out after cloning
    #[clap(short, long)]
    pub commit: Option<String>,
    /// Base directory for fetched repositories
    #[clap(short, long, env = "REPOFETCH_TMP_DIR")]
    pub tmp_dir: Option<PathBuf>,
}
