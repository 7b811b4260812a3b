//! Validate command: run the template validator/repairer locally.

use crate::error::CliError;
use crate::pot::PotValidator;
use crate::utils::ui;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Directory containing .pot files to validate.
    pub dir: PathBuf,

    /// Checker program to run against each template.
    #[arg(long, default_value = "msgfmt")]
    pub checker: PathBuf,
}

/// Run the validate command.
pub fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let validator = PotValidator::new(args.checker);
    let count = validator.validate_dir(&args.dir)?;
    ui::print_validate_ok(count);
    Ok(())
}
