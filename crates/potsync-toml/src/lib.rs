#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncConfigError {
    /// Configuration file not found.
    #[error("projects configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The configuration for `potsync`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SyncConfig {
    /// The remote build host templates are fetched from and artifacts deployed to.
    pub remote: RemoteConfig,
    /// The translation-service command-line client.
    #[serde(default)]
    pub service: ServiceConfig,
    /// External gettext tooling.
    #[serde(default)]
    pub tools: ToolsConfig,
    /// The projects to synchronize, processed in order.
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

/// Remote host settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Host name as known to the local ssh configuration.
    pub host: String,
    /// Shell commands run on the host once per sync, before any project is
    /// processed (e.g. refreshing the installed template packages).
    #[serde(default)]
    pub prepare: Vec<String>,
}

/// Translation-service client settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// The client executable to invoke.
    #[serde(default = "default_service_program")]
    pub program: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            program: default_service_program(),
        }
    }
}

fn default_service_program() -> String {
    "zanata".to_string()
}

/// External gettext tooling settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// The gettext catalog checker/compiler.
    #[serde(default = "default_msgfmt")]
    pub msgfmt: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            msgfmt: default_msgfmt(),
        }
    }
}

fn default_msgfmt() -> PathBuf {
    PathBuf::from("msgfmt")
}

/// One project to synchronize.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Human-readable project name, also used for the compiled catalog file name.
    pub name: String,
    /// Package installed on the remote host whose version names the service version.
    pub package: String,
    /// Project identifier on the translation service.
    pub project_id: String,
    /// Project type understood by the translation service (e.g. "gettext").
    pub project_type: String,
    /// Remote directory holding the project's `.pot` templates.
    pub pot_dir: String,
    /// Optional remote directory of plain-text assets to compile into `assets.pot`.
    #[serde(default)]
    pub assets_dir: Option<String>,
    /// Present when the project consumes a scripting dictionary instead of a
    /// compiled `.mo` catalog.
    #[serde(default)]
    pub script_dict: Option<ScriptDictConfig>,
}

/// Deployment settings for script-dictionary projects.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScriptDictConfig {
    /// Remote directory receiving one `<locale>/lang.lua` per language.
    pub locales_dir: String,
    /// Optional shell command run on the host after the dictionary is uploaded
    /// (e.g. repacking a game archive).
    #[serde(default)]
    pub post_install: Option<String>,
}

impl SyncConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SyncConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SyncConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;

        let config: SyncConfig = toml::from_str(&content)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("projects.toml");
        fs::write(&config_path, content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn test_read_from_path_success() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"

[[projects]]
name = "snake"
package = "snake-i18n-orig"
project_id = "snake"
project_type = "gettext"
pot_dir = "/usr/share/snake/pot"
"#,
        );

        let config = SyncConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.remote.host, "buildhost");
        assert!(config.remote.prepare.is_empty());
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].name, "snake");
        assert_eq!(config.projects[0].pot_dir, "/usr/share/snake/pot");
        assert!(config.projects[0].assets_dir.is_none());
        assert!(config.projects[0].script_dict.is_none());
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let non_existent_path = Path::new("/non/existent/path/projects.toml");
        let result = SyncConfig::read_from_path(non_existent_path);
        assert!(matches!(result, Err(SyncConfigError::NotFound(_))));
    }

    #[test]
    fn test_read_from_path_invalid_toml() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"

[[projects]]
name = "missing the required fields"
"#,
        );

        let result = SyncConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(SyncConfigError::ParseError(_))));
    }

    #[test]
    fn test_service_and_tools_defaults() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"
"#,
        );

        let config = SyncConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.service.program, "zanata");
        assert_eq!(config.tools.msgfmt, PathBuf::from("msgfmt"));
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_prepare_commands() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"
prepare = ["sudo apt-get update", "sudo apt-get install *-i18n-orig"]
"#,
        );

        let config = SyncConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.remote.prepare.len(), 2);
        assert_eq!(config.remote.prepare[0], "sudo apt-get update");
    }

    #[test]
    fn test_script_dict_project() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"

[[projects]]
name = "overworld"
package = "overworld-i18n-orig"
project_id = "overworld"
project_type = "gettext"
pot_dir = "/usr/share/overworld/pot"

[projects.script_dict]
locales_dir = "res/locales"
post_install = "sudo zip -9 -r /usr/share/overworld/build/overworld.love res/"
"#,
        );

        let config = SyncConfig::read_from_path(&config_path).unwrap();
        let dict = config.projects[0].script_dict.as_ref().unwrap();
        assert_eq!(dict.locales_dir, "res/locales");
        assert_eq!(
            dict.post_install.as_deref(),
            Some("sudo zip -9 -r /usr/share/overworld/build/overworld.love res/")
        );
    }

    #[test]
    fn test_assets_dir_project() {
        let (_tmp, config_path) = write_config(
            r#"
[remote]
host = "buildhost"

[[projects]]
name = "quest"
package = "quest-i18n-orig"
project_id = "quest"
project_type = "gettext"
pot_dir = "/usr/share/quest/pot"
assets_dir = "/usr/share/quest/assets"
"#,
        );

        let config = SyncConfig::read_from_path(&config_path).unwrap();
        assert_eq!(
            config.projects[0].assets_dir.as_deref(),
            Some("/usr/share/quest/assets")
        );
    }
}
