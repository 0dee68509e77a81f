use git2::Repository;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::{AuthorInfo, HistoryEntry, RepositoryInfo};

const SHORT_OID_LEN: usize = 12;

pub struct GitRepository {
    pub repo: Mutex<Repository>,
    pub name: String,
    pub path: String,
}

impl GitRepository {
    pub fn open<P: AsRef<Path>>(name: impl Into<String>, path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path)
            .map_err(|_| AppError::RepoNotFound(path_str.clone()))?;

        Ok(Self {
            repo: Mutex::new(repo),
            name: name.into(),
            path: path_str,
        })
    }

    pub fn info(&self) -> Result<RepositoryInfo> {
        self.with_repo(|repo| {
            let head_branch = repo.head().ok().and_then(|h| {
                if h.is_branch() {
                    h.shorthand().map(|s| s.to_string())
                } else {
                    None
                }
            });

            Ok(RepositoryInfo {
                name: self.name.clone(),
                path: self.path.clone(),
                head_branch,
                is_empty: repo.is_empty().unwrap_or(true),
            })
        })
    }

    pub fn with_repo<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Repository) -> Result<T>,
    {
        let repo = self.repo.lock().map_err(|_| AppError::lock_poisoned())?;
        f(&repo)
    }
}

/// Repositories served by this process, keyed by their route name.
#[derive(Default)]
pub struct RepositoryRegistry {
    repos: BTreeMap<String, GitRepository>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, repo: GitRepository) -> Result<()> {
        if self.repos.contains_key(&repo.name) {
            return Err(AppError::InvalidRequest(format!(
                "duplicate repository name: {}",
                repo.name
            )));
        }
        self.repos.insert(repo.name.clone(), repo);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&GitRepository> {
        self.repos
            .get(name)
            .ok_or_else(|| AppError::RepoNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GitRepository> {
        self.repos.values()
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

pub fn commit_to_entry(commit: &git2::Commit) -> HistoryEntry {
    let oid = commit.id().to_string();
    let timestamp = commit.time().seconds();
    let author = commit.author();

    HistoryEntry {
        short_oid: oid.chars().take(SHORT_OID_LEN).collect(),
        oid,
        summary: commit.summary().unwrap_or("").to_string(),
        message: commit.message().unwrap_or("").trim().to_string(),
        author: AuthorInfo {
            name: author.name().unwrap_or("Unknown").to_string(),
            email: author.email().unwrap_or("").to_string(),
        },
        timestamp,
        relative_time: format_relative_time(timestamp),
        parents: commit.parent_ids().map(|id| id.to_string()).collect(),
    }
}

pub fn format_relative_time(timestamp: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let diff = now - timestamp;

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        let mins = diff / 60;
        format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if diff < 86400 {
        let hours = diff / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if diff < 2592000 {
        let days = diff / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else if diff < 31536000 {
        let months = diff / 2592000;
        format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
    } else {
        let years = diff / 31536000;
        format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(format_relative_time(now), "just now");
        assert_eq!(format_relative_time(now - 3600), "1 hour ago");
        assert_eq!(format_relative_time(now - 3 * 86400), "3 days ago");
        assert_eq!(format_relative_time(now - 2 * 31536000), "2 years ago");
    }

    #[test]
    fn unknown_repository_is_not_found() {
        let registry = RepositoryRegistry::new();
        let err = registry.get("nope").err().unwrap();
        assert!(err.is_not_found());
    }
}
