//! Short commit hash lookup via the git command line
//!
//! The query never fails from the caller's point of view: spawn errors,
//! non-zero exits, and stderr output are logged and whatever stdout was
//! captured (possibly nothing) becomes the commit.

use crate::types::CommitHash;
use log::{debug, error, warn};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Arguments for the short-hash query
pub const SHORT_HASH_ARGS: [&str; 3] = ["rev-parse", "--short", "HEAD"];

/// A read-only `rev-parse --short HEAD` invocation
#[derive(Debug, Clone)]
pub struct CommitQuery {
    program: String,
    work_dir: Option<PathBuf>,
}

/// Everything the subprocess reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutput {
    /// Trimmed stdout
    pub commit: CommitHash,
    /// Exit status, or None if the process never started
    pub status: Option<ExitStatus>,
}

impl CommitQuery {
    pub fn new(program: impl Into<String>) -> Self {
        CommitQuery {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run the query from `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Run the query, blocking until the subprocess exits
    pub fn run(&self) -> CommitOutput {
        let mut command = Command::new(&self.program);
        command.args(SHORT_HASH_ARGS);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        debug!("Running {} {}", self.program, SHORT_HASH_ARGS.join(" "));

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                error!("error: failed to run {}: {}", self.program, e);
                return CommitOutput {
                    commit: CommitHash::default(),
                    status: None,
                };
            }
        };

        if !output.status.success() {
            error!("error: {} exited with {}", self.program, output.status);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            warn!("stderr: {}", stderr.trim_end());
        }

        CommitOutput {
            commit: CommitHash::new(String::from_utf8_lossy(&output.stdout)),
            status: Some(output.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_yields_empty_commit() {
        let output = CommitQuery::new("verstamp-no-such-git-binary").run();
        assert!(output.commit.is_empty());
        assert!(output.status.is_none());
    }

    #[test]
    fn test_outside_repository_does_not_panic() {
        let dir = tempfile::TempDir::new().unwrap();
        // git may or may not be installed; either way the query must return
        let output = CommitQuery::new("git").in_dir(dir.path()).run();
        if let Some(status) = output.status {
            if !status.success() {
                assert!(output.commit.is_empty());
            }
        }
    }
}
