#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use git2::{Oid, Repository, Signature, Time};
use git_history::config::PagingConfig;
use git_history::git::{GitRepository, RepositoryRegistry};
use git_history::routes::{AppState, SharedState};
use rstest::fixture;

pub const BASE_TIME: i64 = 1_700_000_000;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        Self { dir, repo }
    }

    /// Write `files`, stage them and commit on HEAD at `timestamp`.
    pub fn commit(&self, files: &[(&str, &str)], message: &str, timestamp: i64) -> Oid {
        let mut index = self.repo.index().unwrap();
        for (path, content) in files {
            self.dir.child(path).write_str(content).unwrap();
            index.add_path(Path::new(path)).unwrap();
        }
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Signature::new("Ada", "ada@example.com", &Time::new(timestamp, 0)).unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Delete `path` from the work tree and index, then commit.
    pub fn remove(&self, path: &str, message: &str, timestamp: i64) -> Oid {
        std::fs::remove_file(self.dir.path().join(path)).unwrap();
        let mut index = self.repo.index().unwrap();
        index.remove_path(Path::new(path)).unwrap();
        index.write().unwrap();
        self.commit(&[], message, timestamp)
    }

    pub fn branch(&self, name: &str, target: Oid) {
        let commit = self.repo.find_commit(target).unwrap();
        self.repo.branch(name, &commit, false).unwrap();
    }

    pub fn open(&self, name: &str) -> GitRepository {
        GitRepository::open(name, self.dir.path()).unwrap()
    }

    pub fn state(&self, name: &str) -> SharedState {
        let mut registry = RepositoryRegistry::new();
        registry.insert(self.open(name)).unwrap();
        Arc::new(AppState {
            registry,
            paging: PagingConfig::default(),
        })
    }
}

/// Six commits, newest last: odd ones touch `src/`, even ones `docs/`.
#[fixture]
pub fn linear_repo() -> TestRepo {
    let repo = TestRepo::init();
    for n in 0..6 {
        let file = if n % 2 == 0 { "docs/notes.md" } else { "src/lib.rs" };
        let content = format!("revision {}", n);
        repo.commit(&[(file, &content)], &format!("commit {}", n), BASE_TIME + n * 60);
    }
    repo
}

pub fn summaries(entries: &[git_history::models::HistoryEntry]) -> Vec<String> {
    entries.iter().map(|e| e.summary.clone()).collect()
}
