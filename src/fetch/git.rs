use std::path::PathBuf;

use crate::{git::fetcher::GitFetcher, model::RepoName};

use super::Fetcher;

impl Fetcher for GitFetcher {
    fn fetch(
        &self,
        name: &RepoName,
        branch: &str,
        commit: Option<&str>,
    ) -> anyhow::Result<PathBuf> {
        Ok(self.fetch_repository(name, branch, commit)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::git::{repository::GitRepository, testing::init_origin};

    #[test]
    fn fetches_through_the_trait() {
        let origin = TempDir::new().unwrap();
        init_origin(origin.path());
        let tmp = TempDir::new().unwrap();
        let git_fetcher = GitFetcher::new(tmp.path().to_path_buf()).unwrap();
        let name = RepoName::new("example.com/org/repo").unwrap();

        // Clone up front so the fetch stays local via the open fallback.
        let folder = tmp.path().join("example.com/org/repo");
        let url = origin.path().display().to_string();
        GitRepository::clone_branch(&url, "main", &folder).unwrap();

        let fetcher: &dyn Fetcher = &git_fetcher;
        let path = fetcher.fetch(&name, "main", None).unwrap();
        assert_eq!(path, folder);
    }
}
