//! Client for the translation service's command-line tool.
//!
//! The tool owns authentication and wire details; this wrapper only shells
//! out, echoing each command line so a run can be replayed by hand.

use crate::utils::ui;
use anyhow::{Context as _, Result, bail};
use potsync_toml::ProjectConfig;
use std::path::Path;
use std::process::Output;

pub struct ServiceClient {
    program: String,
}

impl ServiceClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        ui::print_command(&format!("{} {}", self.program, args.join(" ")));
        std::process::Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("failed to run {}", self.program))
    }

    fn run_checked(&self, args: &[&str], action: &str) -> Result<()> {
        let output = self.run(args)?;
        if !output.status.success() {
            bail!(
                "{action}:\n{}{}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(())
    }

    pub fn project_exists(&self, project_id: &str) -> Result<bool> {
        let output = self.run(&["project", "info", "--project-id", project_id])?;
        Ok(output.status.success())
    }

    pub fn create_project(&self, project: &ProjectConfig) -> Result<()> {
        self.run_checked(
            &[
                "project",
                "create",
                &project.project_id,
                "--project-name",
                &project.name,
                "--project-desc",
                &format!("Translations for {}", project.name),
                "--project-type",
                &project.project_type,
            ],
            &format!("failed to create project {}", project.name),
        )
    }

    pub fn ensure_project(&self, project: &ProjectConfig) -> Result<()> {
        ui::print_checking_project(&project.name);
        if !self.project_exists(&project.project_id)? {
            ui::print_creating_project(&project.name);
            self.create_project(project)?;
        }
        Ok(())
    }

    pub fn version_exists(&self, project_id: &str, version: &str) -> Result<bool> {
        let output = self.run(&[
            "version",
            "info",
            "--project-id",
            project_id,
            "--project-version",
            version,
        ])?;
        Ok(output.status.success())
    }

    pub fn create_version(&self, project: &ProjectConfig, version: &str) -> Result<()> {
        self.run_checked(
            &[
                "version",
                "create",
                version,
                "--project-id",
                &project.project_id,
            ],
            &format!(
                "failed to create version {} for {}",
                version, project.name
            ),
        )
    }

    pub fn ensure_version(&self, project: &ProjectConfig, version: &str) -> Result<()> {
        ui::print_checking_version(&project.name, version);
        if !self.version_exists(&project.project_id, version)? {
            ui::print_creating_version(&project.name, version);
            self.create_version(project, version)?;
        }
        Ok(())
    }

    /// Uploads every template in `srcdir` to the service.
    pub fn push(&self, project: &ProjectConfig, version: &str, srcdir: &Path) -> Result<()> {
        self.run_checked(
            &[
                "push",
                "-f",
                "--srcdir",
                &srcdir.display().to_string(),
                "--project-id",
                &project.project_id,
                "--project-version",
                version,
                "--project-type",
                &project.project_type,
            ],
            &format!("failed to upload templates for {}", project.name),
        )
    }

    /// Downloads the catalogs for one language into `transdir`.
    pub fn pull(
        &self,
        project: &ProjectConfig,
        version: &str,
        lang: &str,
        transdir: &Path,
    ) -> Result<()> {
        self.run_checked(
            &[
                "pull",
                "--lang",
                lang,
                "--transdir",
                &transdir.display().to_string(),
                "--project-id",
                &project.project_id,
                "--project-version",
                version,
                "--project-type",
                &project.project_type,
            ],
            &format!("failed to pull translations for {}", project.name),
        )
    }
}
