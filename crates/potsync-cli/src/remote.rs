//! Session against the remote build host, backed by the system `ssh`/`scp`
//! binaries. Host aliases, users, and proxies come from the operator's ssh
//! configuration.

use crate::utils::ui;
use anyhow::{Context as _, Result, bail};
use std::path::Path;
use std::process::Command;

/// An explicit handle for one remote host. Every operation that touches the
/// host takes the session as an argument; nothing is process-global.
pub struct RemoteSession {
    host: String,
}

impl RemoteSession {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Runs a shell command on the host and returns its stdout.
    pub fn exec(&self, command: &str) -> Result<String> {
        ui::print_command(&format!("ssh {} {}", self.host, command));

        let output = Command::new("ssh")
            .arg("-o")
            .arg("BatchMode=yes")
            .arg(&self.host)
            .arg(command)
            .output()
            .context("failed to run ssh")?;

        if !output.status.success() {
            bail!(
                "remote command failed on {}: {}\n{}",
                self.host,
                command,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Lists the file names in a remote directory.
    pub fn list_dir(&self, remote_dir: &str) -> Result<Vec<String>> {
        let listing = self.exec(&format!("ls -1 {remote_dir}"))?;
        Ok(listing
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Copies a remote file to a local path.
    pub fn fetch(&self, remote: &str, local: &Path) -> Result<()> {
        self.scp(
            &format!("{}:{}", self.host, remote),
            &local.display().to_string(),
        )
    }

    /// Copies a local file to a remote path.
    pub fn put(&self, local: &Path, remote: &str) -> Result<()> {
        self.scp(
            &local.display().to_string(),
            &format!("{}:{}", self.host, remote),
        )
    }

    /// Copies every file in a remote directory into a local directory.
    pub fn fetch_dir(&self, remote_dir: &str, local_dir: &Path) -> Result<()> {
        let remote_dir = remote_dir.trim_end_matches('/');
        for name in self.list_dir(remote_dir)? {
            ui::print_copying(&name);
            self.fetch(&format!("{remote_dir}/{name}"), &local_dir.join(&name))?;
        }
        Ok(())
    }

    fn scp(&self, from: &str, to: &str) -> Result<()> {
        let output = Command::new("scp")
            .arg("-q")
            .arg("-o")
            .arg("BatchMode=yes")
            .arg(from)
            .arg(to)
            .output()
            .context("failed to run scp")?;

        if !output.status.success() {
            bail!(
                "file transfer failed ({from} -> {to}):\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(())
    }
}
