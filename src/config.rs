//! Server configuration assembled from the command line.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::git::{GitRepository, RepositoryRegistry};
use crate::pager::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, PAGE_SIZE_LIMIT};

/// A repository argument of the form `[NAME=]PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub name: String,
    pub path: PathBuf,
}

impl FromStr for RepoSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, path) = match s.split_once('=') {
            Some((name, path)) => (name.trim().to_string(), PathBuf::from(path)),
            None => {
                let path = PathBuf::from(s);
                (default_repo_name(&path), path)
            }
        };

        if name.is_empty() || name.contains('/') {
            return Err(format!("invalid repository name in '{}'", s));
        }
        if path.as_os_str().is_empty() {
            return Err(format!("missing repository path in '{}'", s));
        }

        Ok(Self { name, path })
    }
}

/// Name a repository after its directory, resolving `.` and friends.
fn default_repo_name(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "repository".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(AppError::InvalidRequest(
                "page sizes must be at least 1".to_string(),
            ));
        }
        if self.max_page_size > PAGE_SIZE_LIMIT {
            return Err(AppError::InvalidRequest(format!(
                "maximum page size {} exceeds limit {}",
                self.max_page_size, PAGE_SIZE_LIMIT
            )));
        }
        if self.default_page_size > self.max_page_size {
            return Err(AppError::InvalidRequest(format!(
                "default page size {} exceeds maximum {}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub repositories: Vec<RepoSpec>,
    pub paging: PagingConfig,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repositories.is_empty() {
            return Err(AppError::InvalidRequest(
                "at least one repository is required".to_string(),
            ));
        }
        self.paging.validate()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Open every configured repository.
    pub fn open_repositories(&self) -> Result<RepositoryRegistry> {
        let mut registry = RepositoryRegistry::new();
        for spec in &self.repositories {
            let repo = GitRepository::open(&spec.name, &spec.path)?;
            tracing::info!("Serving {} from {}", spec.name, spec.path.display());
            registry.insert(repo)?;
        }
        Ok(registry)
    }
}
