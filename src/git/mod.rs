pub mod fetcher;
pub mod repository;

#[cfg(test)]
pub(crate) mod testing {
    use std::{fs, path::Path};

    use git2::{Oid, Repository, Signature};

    pub fn commit_file(repo: &Repository, file: &str, content: &str, message: &str) -> Oid {
        let workdir = repo.workdir().unwrap();
        fs::write(workdir.join(file), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let signature = Signature::now("test", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )
        .unwrap()
    }

    /// Creates a repository with two commits on `main`, returning their hashes.
    pub fn init_origin(dir: &Path) -> (Oid, Oid) {
        let repo = Repository::init(dir).unwrap();
        repo.set_head("refs/heads/main").unwrap();
        let first = commit_file(&repo, "README.md", "one", "initial import");
        let second = commit_file(&repo, "README.md", "two", "update readme");
        (first, second)
    }
}
