//! Helpers for building throwaway git repositories.

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Initialize an empty repository with a configured identity
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write README.md with `content` and commit it on HEAD
    pub fn commit(&self, message: &str, content: &str) -> Oid {
        let content_path = self.path().join("README.md");
        fs::write(&content_path, content).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        self.repo
            .tag(name, &object, &sig, "release", false)
            .expect("Could not create tag");
    }

    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Could not find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Could not create branch");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.path().join("tagnext.toml"), content).expect("Could not write config");
    }
}

/// A repository with `v1.2.3` tagged on the first commit and one commit after it
pub fn tagged_repo() -> TestRepo {
    let repo = TestRepo::new();
    let first = repo.commit("Initial commit", "Initial content\n");
    repo.tag_lightweight("v1.2.3", first);
    repo.commit("feat: add new feature", "Updated content\n");
    repo
}
