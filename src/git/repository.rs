use std::path::Path;

use git2::{
    build::{CheckoutBuilder, RepoBuilder},
    ErrorCode, Oid, Repository,
};
use log::trace;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitRepoError {
    #[error("repository already exists at {path}")]
    AlreadyExists { path: String },
    #[error("repository at {path} is bare and has no working tree")]
    NoWorktree { path: String },
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Local clone of a remote repository.
pub struct GitRepository {
    git_repo: Repository,
}

impl GitRepository {
    /// Clones `refs/heads/<branch>` from `url` into `path`.
    ///
    /// Only the requested branch is fetched, with full history (libgit2
    /// clones are depth-unlimited). A destination that already holds content
    /// is reported as [`GitRepoError::AlreadyExists`] so that callers can
    /// fall back to opening it.
    pub fn clone_branch(url: &str, branch: &str, path: &Path) -> Result<GitRepository, GitRepoError> {
        trace!("Cloning {} ({}) into {}", url, branch, path.display());

        let refspec = format!("+refs/heads/{branch}:refs/remotes/origin/{branch}");
        let mut builder = RepoBuilder::new();
        builder
            .branch(branch)
            .remote_create(move |repo, name, url| repo.remote_with_fetch(name, url, &refspec));

        match builder.clone(url, path) {
            Ok(git_repo) => Ok(GitRepository { git_repo }),
            Err(error) if error.code() == ErrorCode::Exists => Err(GitRepoError::AlreadyExists {
                path: path.display().to_string(),
            }),
            Err(error) => Err(GitRepoError::Git(error)),
        }
    }

    /// Opens an existing repository at `path`.
    pub fn open(path: &Path) -> Result<GitRepository, GitRepoError> {
        trace!("Opening existing repository at {}", path.display());

        let git_repo = Repository::open(path)?;
        Ok(GitRepository { git_repo })
    }

    /// Checks the working tree out at `commit_hash`, leaving HEAD detached.
    pub fn checkout_commit(&self, commit_hash: &str) -> Result<(), GitRepoError> {
        if self.git_repo.is_bare() {
            return Err(GitRepoError::NoWorktree {
                path: self.git_repo.path().display().to_string(),
            });
        }

        let oid = Oid::from_str(commit_hash)?;
        let object = self.git_repo.find_object(oid, None)?;
        let mut checkout = CheckoutBuilder::new();
        checkout.force();
        self.git_repo.checkout_tree(&object, Some(&mut checkout))?;
        self.git_repo.set_head_detached(oid)?;

        Ok(())
    }
}
