use std::{
    fmt::{self, Display},
    path::Path,
    str::FromStr,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("repository name cannot be empty")]
    EmptyName,
}

/// Host and path of a remote repository, e.g. `example.com/org/repo`.
///
/// The name doubles as the clone URL (prefixed with `https://`) and as the
/// folder the repository is fetched into, relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoName(String);

impl RepoName {
    pub fn new(name: impl Into<String>) -> Result<RepoName, ParseError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }
        Ok(RepoName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn clone_url(&self) -> String {
        format!("https://{}", self.0)
    }

    pub fn relative_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RepoName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RepoName, ParseError> {
        RepoName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn builds_https_clone_url() {
        let name = RepoName::new("example.com/org/repo").unwrap();
        assert_eq!(name.clone_url(), "https://example.com/org/repo");
    }

    #[test]
    fn name_is_a_relative_path() {
        let name = RepoName::new("example.com/org/repo").unwrap();
        assert_eq!(name.relative_path(), Path::new("example.com/org/repo"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(RepoName::new(""), Err(ParseError::EmptyName)));
    }

    #[test]
    fn parses_from_str() {
        let name: RepoName = "example.com/org/repo".parse().unwrap();
        assert_eq!(name.as_str(), "example.com/org/repo");
    }
}
