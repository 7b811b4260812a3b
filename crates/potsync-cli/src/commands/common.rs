//! Shared pieces of the push and pull flows.

use crate::error::CliError;
use crate::remote::RemoteSession;
use crate::utils::ui;
use anyhow::{Result, bail};
use clap::Parser;
use potsync_toml::{ProjectConfig, SyncConfig};
use std::path::PathBuf;

/// Configuration file location, shared by all remote-facing commands.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Path to the projects configuration file.
    #[arg(short, long, default_value = "projects.toml")]
    pub config: PathBuf,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<SyncConfig, CliError> {
        Ok(SyncConfig::read_from_path(&self.config)?)
    }
}

/// Looks up the installed package version on the host; it names the service
/// version the project's strings are filed under.
pub fn fetch_package_version(
    session: &RemoteSession,
    project: &ProjectConfig,
) -> Result<String> {
    ui::print_fetching_version(&project.name);

    let raw = session.exec(&format!(
        "dpkg-query --showformat='${{Version}}' --show {}",
        project.package
    ))?;

    let version = raw.trim().to_string();
    if version.is_empty() {
        bail!("could not fetch version for {}", project.name);
    }
    Ok(version)
}

/// Runs the configured prepare commands on the host. Failures are reported
/// but do not stop the run.
pub fn run_prepare_commands(session: &RemoteSession, commands: &[String]) {
    for command in commands {
        if let Err(error) = session.exec(command) {
            ui::print_remote_warning(command, &error);
        }
    }
}
