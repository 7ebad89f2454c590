//! Version-control adapter that shells out to `git` and `gh`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::trace;

use stamp_core::{
    application::{ApplicationError, ports::VcsReader},
    error::StampResult,
};

/// Production [`VcsReader`] running the `git` and `gh` executables.
///
/// Every query is one blocking process invocation. Output is trimmed;
/// a missing executable, non-zero exit or non-UTF-8 output is an error.
#[derive(Debug, Clone)]
pub struct GitCliReader {
    workdir: Option<PathBuf>,
    git: String,
    gh: String,
}

impl GitCliReader {
    /// Reader that runs in the current working directory.
    pub fn new() -> Self {
        Self {
            workdir: None,
            git: "git".into(),
            gh: "gh".into(),
        }
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Override the executables, e.g. to point at absolute paths.
    pub fn with_programs(mut self, git: impl Into<String>, gh: impl Into<String>) -> Self {
        self.git = git.into();
        self.gh = gh.into();
        self
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn run(&self, program: &str, args: &[&str]) -> StampResult<Output> {
        let rendered = render_command(program, args);
        trace!(command = %rendered, "spawning");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| ApplicationError::CommandUnavailable {
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::CommandFailed {
                command: rendered,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(output)
    }

    fn run_stdout(&self, program: &str, args: &[&str]) -> StampResult<String> {
        let output = self.run(program, args)?;
        decode(program, args, output.stdout)
    }
}

impl Default for GitCliReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsReader for GitCliReader {
    fn read_config(&self, key: &str) -> StampResult<String> {
        self.run_stdout(&self.git, &["config", key])
    }

    fn read_history(&self, author_pattern: &str) -> StampResult<String> {
        let author = format!("--author={author_pattern}");
        self.run_stdout(
            &self.git,
            &["log", &author, "--pretty=%an:%ae", "--reverse"],
        )
    }

    fn read_remote_url(&self) -> StampResult<String> {
        self.run_stdout(&self.git, &["config", "remote.origin.url"])
    }

    /// `gh` prints its status to stderr on some versions and stdout on
    /// others, so both streams are returned.
    fn read_session_status(&self, host: &str) -> StampResult<String> {
        let args = ["auth", "status", "-h", host];
        let output = self.run(&self.gh, &args)?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        decode(&self.gh, &args, combined)
    }
}

fn decode(program: &str, args: &[&str], bytes: Vec<u8>) -> StampResult<String> {
    String::from_utf8(bytes)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            ApplicationError::MalformedOutput {
                command: render_command(program, args),
                reason: e.to_string(),
            }
            .into()
        })
}

fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
