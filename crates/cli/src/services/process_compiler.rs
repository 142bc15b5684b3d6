//! Compiler that runs the configured build tool as a child process

use buildpanel_core::config::BuildCommandConfig;
use buildpanel_core::interfaces::{BuildRequest, CompileOutcome, Compiler};
use buildpanel_core::{Error, IssueKind, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::utils::{parse_build_output, read_lossy};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct ProcessCompiler {
    command: BuildCommandConfig,
    solution: PathBuf,
    working_dir: Option<PathBuf>,
}

impl ProcessCompiler {
    pub fn new(command: BuildCommandConfig, solution: PathBuf) -> Self {
        Self {
            command,
            solution,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Shell-like rendering of the command for `request`
    pub fn to_shell_command(&self, request: &BuildRequest) -> String {
        let mut parts = vec![self.command.command.clone()];
        parts.extend(self.command.expand_args(
            &self.solution,
            &request.project,
            request.configuration(),
        ));
        parts.join(" ")
    }

    fn spawn(&self, request: &BuildRequest) -> Result<Child> {
        if let Some(parent) = request.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stdout = File::create(&request.log_path)?;
        let stderr = stdout.try_clone()?;

        let mut cmd = Command::new(&self.command.command);
        cmd.args(self.command.expand_args(
            &self.solution,
            &request.project,
            request.configuration(),
        ))
        .envs(&self.command.env)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr));

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        cmd.spawn().map_err(|e| {
            Error::Compiler(format!(
                "Failed to start '{}': {}",
                self.to_shell_command(request),
                e
            ))
        })
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let Some(secs) = self.command.timeout_secs else {
            return child.wait().map_err(|e| {
                stop(child);
                e.into()
            });
        };

        let deadline = Instant::now() + Duration::from_secs(secs);
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {}
                Err(e) => {
                    stop(child);
                    return Err(e.into());
                }
            }
            if Instant::now() >= deadline {
                tracing::warn!("Build exceeded {}s, killing pid {}", secs, child.id());
                stop(child);
                return Err(Error::Compiler(format!("Build timed out after {secs}s")));
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Kill and reap `child`, logging any failure
fn stop(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!("Failed to kill pid {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        tracing::warn!("Failed to reap pid {}: {}", child.id(), e);
    }
}

impl Compiler for ProcessCompiler {
    fn build_blocking(&self, request: &BuildRequest) -> Result<CompileOutcome> {
        tracing::info!("Running: {}", self.to_shell_command(request));

        let mut child = self.spawn(request)?;
        let status = self.wait(&mut child)?;

        let issues = parse_build_output(&read_lossy(&request.log_path)?);
        let error_count = count(&issues, IssueKind::Error);
        let warning_count = count(&issues, IssueKind::Warning);
        tracing::debug!(
            "Build exited with {} ({} errors, {} warnings)",
            status,
            error_count,
            warning_count
        );

        let outcome = if status.success() {
            CompileOutcome::succeeded(warning_count)
        } else {
            // A failing tool that printed no diagnostics still failed once
            CompileOutcome::failed(error_count.max(1), warning_count)
        };

        Ok(outcome
            .with_issues(issues)
            .with_log_path(request.log_path.clone()))
    }
}

fn count(issues: &[buildpanel_core::BuildIssue], kind: IssueKind) -> usize {
    issues.iter().filter(|issue| issue.kind == kind).count()
}
