use crate::pot::PotError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error("Failed to load projects configuration: {0}")]
    Config(#[from] potsync_toml::SyncConfigError),

    #[error(transparent)]
    Pot(#[from] PotError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
