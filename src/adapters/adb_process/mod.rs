//! adb execution adapter
//!
//! Runs the Android device bridge as a child process for each command and
//! captures its output.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// adb-based device bridge adapter
pub struct AdbProcessAdapter;

impl AdbProcessAdapter {
    /// Create new adb adapter
    pub fn new() -> Self {
        Self
    }

    /// Run adb with `args` and return trimmed stdout followed by stderr
    async fn run(
        &self,
        session: &AdbSession,
        args: Vec<String>,
        timeout: Option<Duration>,
    ) -> Result<String, DomainError> {
        let printable = printable_command(session.adb_path(), &args);
        debug!("$ {}", printable);

        let child = Command::new(session.adb_path())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::execution(format!("failed to start `{}`: {}", printable, e), ""))?;

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    DomainError::execution(
                        format!("`{}` did not finish within {:?}", printable, limit),
                        "",
                    )
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| DomainError::execution(format!("failed to wait for `{}`: {}", printable, e), ""))?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(DomainError::execution(
                format!("`{}` exited with {}", printable, output.status),
                combined,
            ));
        }

        Ok(combined)
    }
}

impl Default for AdbProcessAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn printable_command(program: &Path, args: &[String]) -> String {
    let mut parts = vec![program.to_string_lossy().to_string()];
    parts.extend(args.iter().map(|arg| {
        if arg.contains(' ') {
            format!("\"{}\"", arg)
        } else {
            arg.clone()
        }
    }));
    parts.join(" ")
}

fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined.trim().to_string()
}

#[async_trait]
impl DeviceBridgePort for AdbProcessAdapter {
    async fn shell(&self, session: &AdbSession, command: &str) -> Result<String, DomainError> {
        self.run(session, session.shell_args(command), None).await
    }

    async fn shell_until_done(
        &self,
        session: &AdbSession,
        command: &str,
        timeout: Option<Duration>,
    ) -> Result<String, DomainError> {
        self.run(session, session.shell_args(command), timeout).await
    }

    async fn pull(
        &self,
        session: &AdbSession,
        remote_path: &str,
        local_path: &Path,
    ) -> Result<String, DomainError> {
        self.run(session, session.pull_args(remote_path, local_path), None)
            .await
    }
}
