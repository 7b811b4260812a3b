//! Template validation with automatic repair of duplicated entries.

use super::{diagnostic, edit};
use crate::utils::ui;
use fs_err as fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PotError {
    /// The checker program itself could not be run.
    #[error("failed to run checker '{}': {source}", checker.display())]
    Checker {
        checker: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The checker rejected the file with a diagnostic the repair step does
    /// not recognize. Carries the raw diagnostic for the operator; callers
    /// treat this as fatal for the whole run rather than guessing at a fix.
    #[error("cannot automatically fix {}:\n{diagnostic}", path.display())]
    Unfixable { path: PathBuf, diagnostic: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Runs an external format checker against `.pot` files and repairs the one
/// failure mode it knows about: a duplicated message definition.
pub struct PotValidator {
    checker: PathBuf,
}

impl Default for PotValidator {
    fn default() -> Self {
        Self::new("msgfmt")
    }
}

impl PotValidator {
    pub fn new(checker: impl Into<PathBuf>) -> Self {
        Self {
            checker: checker.into(),
        }
    }

    /// Validates every `.pot` file in `dir`, in file-name order. Returns the
    /// number of templates checked.
    pub fn validate_dir(&self, dir: &Path) -> Result<usize, PotError> {
        let mut templates: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "pot"))
            .collect();
        templates.sort();

        for template in &templates {
            self.validate_file(template)?;
        }

        Ok(templates.len())
    }

    /// Validates one template, repairing duplicated entries until the checker
    /// passes.
    ///
    /// Each repair deletes the duplicate entry block and merges its leading
    /// provenance line into the original entry, then the checker runs again.
    /// The loop has no iteration cap: it ends when the checker passes or when
    /// a diagnostic it does not recognize appears.
    pub fn validate_file(&self, path: &Path) -> Result<(), PotError> {
        ui::print_validating(path);

        loop {
            let output = Command::new(&self.checker)
                .arg("-c")
                .arg(path)
                .output()
                .map_err(|source| PotError::Checker {
                    checker: self.checker.clone(),
                    source,
                })?;

            if output.status.success() {
                return Ok(());
            }

            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let Some(dup) = diagnostic::parse(path, &stderr) else {
                return Err(PotError::Unfixable {
                    path: path.to_path_buf(),
                    diagnostic: stderr,
                });
            };

            ui::print_fixing_duplicate(path, dup.duplicate_line, dup.first_line);

            // Two passes, both addressed from the same diagnostic: drop the
            // duplicate block, then move the line that preceded it (its
            // provenance comment) up against the original definition. Lines
            // before the deleted block keep their numbers, so the second
            // pass's addresses are still valid on the edited file.
            edit::delete_through_blank(path, dup.duplicate_line)?;
            edit::move_line(
                path,
                dup.duplicate_line.saturating_sub(1),
                dup.first_line.saturating_sub(2),
            )?;
        }
    }
}
