use std::{
    fs, io,
    path::{Path, PathBuf},
    thread,
};

use log::{error, info};
use thiserror::Error;

use crate::model::RepoName;

use super::repository::{GitRepoError, GitRepository};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("base directory {location} is not a directory")]
    BadLocation { location: String },
    #[error("failed to clone {url}: {source}")]
    Clone {
        url: String,
        #[source]
        source: GitRepoError,
    },
    #[error("failed to open existing repository at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: GitRepoError,
    },
    #[error(transparent)]
    NoWorktree(GitRepoError),
    #[error("failed to checkout commit: {0}")]
    Checkout(#[source] GitRepoError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

/// Fetches remote repositories into folders under a base directory.
pub struct GitFetcher {
    tmp_dir: PathBuf,
}

impl GitFetcher {
    /// Creates a fetcher rooted at `tmp_dir`, creating the directory if needed.
    pub fn new(tmp_dir: PathBuf) -> Result<GitFetcher, FetchError> {
        if tmp_dir.exists() {
            if !tmp_dir.is_dir() {
                return Err(FetchError::BadLocation {
                    location: tmp_dir.display().to_string(),
                });
            }
        } else {
            fs::create_dir_all(&tmp_dir)?;
        }

        Ok(GitFetcher { tmp_dir })
    }

    /// Clones `name` into `<tmp_dir>/<name>`, or opens the folder if a
    /// previous fetch already populated it, then checks out `commit` when one
    /// is given.
    ///
    /// On an unexpected clone failure the folder is deleted by a detached
    /// background thread; the deletion is best effort and may still be in
    /// progress when this function returns.
    pub fn fetch_repository(
        &self,
        name: &RepoName,
        branch: &str,
        commit: Option<&str>,
    ) -> Result<PathBuf, FetchError> {
        if let Some(commit) = commit {
            info!("Received commit {} for {}", commit, name);
        }
        let url = name.clone_url();
        let folder = self.tmp_dir.join(name.relative_path());
        info!("Fetching {} into {}", url, folder.display());

        self.fetch_into(&url, folder, branch, commit)
    }

    fn fetch_into(
        &self,
        url: &str,
        folder: PathBuf,
        branch: &str,
        commit: Option<&str>,
    ) -> Result<PathBuf, FetchError> {
        let repository = match GitRepository::clone_branch(url, branch, &folder) {
            Ok(repository) => repository,
            Err(GitRepoError::AlreadyExists { .. }) => {
                GitRepository::open(&folder).map_err(|source| {
                    error!("Failed to open existing repository: {}", source);
                    FetchError::Open {
                        path: folder.display().to_string(),
                        source,
                    }
                })?
            }
            Err(source) => {
                remove_in_background(folder);
                return Err(FetchError::Clone {
                    url: url.to_owned(),
                    source,
                });
            }
        };

        if let Some(commit) = commit {
            match repository.checkout_commit(commit) {
                Ok(()) => {}
                Err(error @ GitRepoError::NoWorktree { .. }) => {
                    error!("Failed to obtain working tree: {}", error);
                    return Err(FetchError::NoWorktree(error));
                }
                Err(error) => {
                    error!("Failed to checkout commit {}: {}", commit, error);
                    return Err(FetchError::Checkout(error));
                }
            }
        }

        Ok(folder)
    }
}

/// Best-effort cleanup of a partially created clone. Never awaited; its own
/// failure is only logged.
fn remove_in_background(folder: PathBuf) {
    thread::spawn(move || {
        if let Err(error) = remove_folder(&folder) {
            error!("Failed to remove {}: {}", folder.display(), error);
        }
    });
}

/// A missing folder is fine: a failed clone may not have created one.
fn remove_folder(folder: &Path) -> io::Result<()> {
    match fs::remove_dir_all(folder) {
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}
