//! Push command: upload the latest templates to the translation service.

use crate::commands::common::{self, ConfigArgs};
use crate::error::CliError;
use crate::pot::{self, PotError, PotValidator};
use crate::remote::RemoteSession;
use crate::service::ServiceClient;
use crate::utils::ui;
use clap::Parser;
use potsync_toml::ProjectConfig;
use std::path::PathBuf;

/// Arguments for the push command.
#[derive(Debug, Parser)]
pub struct PushArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override the template checker program.
    #[arg(long)]
    pub checker: Option<PathBuf>,
}

/// Run the push command.
///
/// Projects are processed in configuration order. A remote or service
/// failure skips to the next project; an unrepairable template aborts the
/// whole run, since pushing strings we cannot vouch for is worse than
/// stopping.
pub fn run_push(args: PushArgs) -> Result<(), CliError> {
    let config = args.config.load()?;

    let session = RemoteSession::new(&config.remote.host);
    let service = ServiceClient::new(&config.service.program);
    let validator = PotValidator::new(
        args.checker
            .unwrap_or_else(|| config.tools.msgfmt.clone()),
    );

    ui::print_push_header();

    common::run_prepare_commands(&session, &config.remote.prepare);

    for project in &config.projects {
        ui::print_project(&project.name);
        match push_project(project, &session, &service, &validator) {
            Ok(()) => {},
            Err(CliError::Pot(error @ PotError::Unfixable { .. })) => {
                ui::print_unfixable(&error);
                return Err(error.into());
            },
            Err(error) => ui::print_project_failed(&project.name, &error),
        }
    }

    Ok(())
}

fn push_project(
    project: &ProjectConfig,
    session: &RemoteSession,
    service: &ServiceClient,
    validator: &PotValidator,
) -> Result<(), CliError> {
    let version = common::fetch_package_version(session, project)?;
    service.ensure_project(project)?;
    service.ensure_version(project, &version)?;

    let workdir = tempfile::tempdir()?;
    ui::print_copying_dir(&project.pot_dir, workdir.path());
    session.fetch_dir(&project.pot_dir, workdir.path())?;

    if let Some(assets_dir) = &project.assets_dir {
        let assets = tempfile::tempdir()?;
        ui::print_copying_dir(assets_dir, assets.path());
        session.fetch_dir(assets_dir, assets.path())?;
        pot::assets_to_pot(assets.path(), workdir.path(), &project.name)?;
    }

    validator.validate_dir(workdir.path())?;

    ui::print_uploading(&project.name);
    service.push(project, &version, workdir.path())?;

    Ok(())
}
