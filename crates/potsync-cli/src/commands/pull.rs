//! Pull command: download completed translations and deploy compiled
//! catalogs back to the build host.

use crate::catalog;
use crate::commands::common::{self, ConfigArgs};
use crate::error::CliError;
use crate::remote::RemoteSession;
use crate::service::ServiceClient;
use crate::utils::ui;
use anyhow::{Result, bail};
use clap::Parser;
use potsync_toml::{ProjectConfig, ScriptDictConfig, SyncConfig};
use std::path::Path;

/// Arguments for the pull command.
#[derive(Debug, Parser)]
pub struct PullArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Language code to pull translations for.
    #[arg(short, long)]
    pub lang: String,
}

/// Run the pull command. Failures are per-project: the run continues with
/// the next project.
pub fn run_pull(args: PullArgs) -> Result<(), CliError> {
    let config = args.config.load()?;

    let session = RemoteSession::new(&config.remote.host);
    let service = ServiceClient::new(&config.service.program);

    ui::print_pull_header(&args.lang);

    for project in &config.projects {
        ui::print_project(&project.name);
        if let Err(error) = pull_project(project, &session, &service, &config, &args.lang) {
            ui::print_project_failed(&project.name, &error);
        }
    }

    Ok(())
}

fn pull_project(
    project: &ProjectConfig,
    session: &RemoteSession,
    service: &ServiceClient,
    config: &SyncConfig,
    lang: &str,
) -> Result<()> {
    let version = common::fetch_package_version(session, project)?;

    let workdir = tempfile::tempdir()?;
    ui::print_copying_dir(&project.pot_dir, workdir.path());
    session.fetch_dir(&project.pot_dir, workdir.path())?;

    ui::print_pulling(&project.name, lang);
    service.pull(project, &version, lang, workdir.path())?;

    if catalog::list_po_files(workdir.path())?.is_empty() {
        ui::print_no_translations(&project.name, lang);
        return Ok(());
    }

    match &project.script_dict {
        Some(dict) => deploy_script_dict(project, session, dict, lang, workdir.path()),
        None => deploy_mo(project, session, config, lang, workdir.path()),
    }
}

/// Compiles the pulled catalogs and installs the `.mo` file under the
/// system locale tree.
fn deploy_mo(
    project: &ProjectConfig,
    session: &RemoteSession,
    config: &SyncConfig,
    lang: &str,
    workdir: &Path,
) -> Result<()> {
    let mo_path = catalog::build_mo(&config.tools.msgfmt, workdir, &project.name)?;

    let mo_name = format!("{}.mo", project.name);
    let staging = format!("/tmp/{mo_name}");
    let destination = format!("/usr/share/locale/{lang}/LC_MESSAGES/{mo_name}");

    session.put(&mo_path, &staging)?;
    session.exec(&format!("sudo mv {staging} {destination}"))?;

    ui::print_deployed(&mo_name, &destination);
    Ok(())
}

/// Renders the language's catalog as a Lua dictionary and installs it in the
/// project's locales tree.
fn deploy_script_dict(
    project: &ProjectConfig,
    session: &RemoteSession,
    dict: &ScriptDictConfig,
    lang: &str,
    workdir: &Path,
) -> Result<()> {
    let po_path = workdir.join(format!("{lang}.po"));
    if !po_path.is_file() {
        bail!("could not read po file at {}", po_path.display());
    }

    ui::print_generating_dict(&project.name, lang);
    let lua_path = workdir.join("lang.lua");
    catalog::generate_script_dict(&po_path, &lua_path)?;

    let locale_dir = script_locale_dir(dict, lang);
    let destination = format!("{locale_dir}/lang.lua");

    session.exec(&format!("mkdir -p {locale_dir}/"))?;
    session.put(&lua_path, &destination)?;

    if let Some(command) = &dict.post_install {
        session.exec(command)?;
    }

    ui::print_deployed("lang.lua", &destination);
    Ok(())
}

/// Remote directory for one language's dictionary.
// TODO: derive the region subtag from the service's locale list instead of
// doubling the language code.
fn script_locale_dir(dict: &ScriptDictConfig, lang: &str) -> String {
    let locale = format!("{}_{}", lang, lang.to_uppercase());
    format!("{}/{}", dict.locales_dir.trim_end_matches('/'), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_locale_dir_doubles_language_code() {
        let dict = ScriptDictConfig {
            locales_dir: "res/locales".to_string(),
            post_install: None,
        };
        assert_eq!(script_locale_dir(&dict, "fr"), "res/locales/fr_FR");
    }

    #[test]
    fn test_script_locale_dir_trims_trailing_slash() {
        let dict = ScriptDictConfig {
            locales_dir: "res/locales/".to_string(),
            post_install: None,
        };
        assert_eq!(script_locale_dir(&dict, "pt"), "res/locales/pt_PT");
    }
}
