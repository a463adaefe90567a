// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{ClintError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository exposing what linting needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            ClintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ClintError::Git(GitError::NotARepository)
            } else {
                ClintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Directory holding the hooks, honouring `core.hooksPath`.
    pub fn hooks_dir(&self) -> PathBuf {
        let configured = self
            .inner
            .config()
            .ok()
            .and_then(|c| c.get_path("core.hooksPath").ok());

        match configured {
            Some(path) if path.is_absolute() => path,
            Some(path) => self
                .inner
                .workdir()
                .unwrap_or_else(|| self.git_dir())
                .join(path),
            None => self.git_dir().join("hooks"),
        }
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the id and message of a commit.
    pub fn get_commit_message(&self, reference: &str) -> Result<(Oid, String)> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok((commit.id(), message.to_string()))
    }

    /// Get commits in a range such as `main..HEAD`, newest first.
    ///
    /// A single reference yields that commit only. An empty right-hand side
    /// means `HEAD`.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let (oid, message) = self.get_commit_message(range)?;
            return Ok(vec![(oid, message)]);
        };
        let to = if to.is_empty() { "HEAD" } else { to };

        let walk_error = |command: &str, e: git2::Error| {
            ClintError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_error("revwalk", e))?;

        let to = self.get_commit(to)?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_error("revwalk.push", e))?;

        if !from.is_empty() {
            let from = self.get_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| walk_error("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                ClintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid, message));
        }

        Ok(commits)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get the SHA and message of a commit.
pub fn get_commit(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    let (oid, message) = repo.get_commit_message(reference)?;
    Ok((oid.to_string(), message))
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
