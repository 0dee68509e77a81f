use git2::{BranchType, Commit, DiffOptions, ErrorCode, ObjectType, Repository, Sort};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::git::repository::{GitRepository, RepositoryRegistry, commit_to_entry};
use crate::history::HistoryFetcher;
use crate::models::{HistoryEntry, SourceLocation};

impl HistoryFetcher for GitRepository {
    fn fetch(
        &self,
        location: &SourceLocation,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>> {
        self.with_repo(|repo| {
            let Some(tip) = resolve_tip(repo, location.branch())? else {
                tracing::debug!("{}: unborn HEAD, empty history", self.name);
                return Ok(Vec::new());
            };

            let start = std::time::Instant::now();
            let entries = walk_history(repo, &tip, location.path(), offset, limit)?;

            // A path gone from the tip still has history; it is only unknown
            // when no commit ever touched it.
            if let Some(path) = location.path() {
                if entries.is_empty()
                    && tip.tree()?.get_path(Path::new(path)).is_err()
                    && walk_history(repo, &tip, Some(path), 0, 1)?.is_empty()
                {
                    return Err(AppError::PathNotFound(path.to_string()));
                }
            }

            tracing::debug!(
                "{}: {} entries at offset {} for {} in {:?}",
                self.name,
                entries.len(),
                offset,
                location.path().unwrap_or("(root)"),
                start.elapsed()
            );

            Ok(entries)
        })
    }
}

impl HistoryFetcher for RepositoryRegistry {
    fn fetch(
        &self,
        location: &SourceLocation,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>> {
        self.get(location.repository())?.fetch(location, offset, limit)
    }
}

/// Resolve the commit history starts from. `None` means HEAD is unborn.
fn resolve_tip<'r>(repo: &'r Repository, branch: Option<&str>) -> Result<Option<Commit<'r>>> {
    let Some(name) = branch else {
        return match repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        };
    };

    let not_found = || AppError::RefNotFound(name.to_string());

    let object = repo
        .find_branch(name, BranchType::Local)
        .or_else(|_| repo.find_branch(name, BranchType::Remote))
        .and_then(|b| b.into_reference().peel(ObjectType::Commit))
        .or_else(|_| repo.revparse_single(name))
        .map_err(|_| not_found())?;

    let commit = object.peel_to_commit().map_err(|_| not_found())?;
    Ok(Some(commit))
}

/// Walk history newest first, skipping `offset` matching commits and
/// collecting at most `limit`.
fn walk_history(
    repo: &Repository,
    tip: &Commit,
    path: Option<&str>,
    offset: usize,
    limit: usize,
) -> Result<Vec<HistoryEntry>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TIME)?;
    revwalk.push(tip.id())?;

    let mut skipped = 0;
    let mut entries = Vec::new();

    for oid in revwalk {
        if entries.len() >= limit {
            break;
        }

        let commit = repo.find_commit(oid?)?;

        if let Some(p) = path {
            if !commit_touches_path(repo, &commit, p)? {
                continue;
            }
        }

        if skipped < offset {
            skipped += 1;
            continue;
        }

        entries.push(commit_to_entry(&commit));
    }

    Ok(entries)
}

fn commit_touches_path(repo: &Repository, commit: &Commit, path: &str) -> Result<bool> {
    let tree = commit.tree()?;

    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let mut opts = DiffOptions::new();
    opts.pathspec(path).disable_pathspec_match(true);

    let diff = repo.diff_tree_to_tree(
        parent_tree.as_ref(),
        Some(&tree),
        Some(&mut opts),
    )?;

    Ok(diff.deltas().len() > 0)
}
