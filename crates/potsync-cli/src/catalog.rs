//! Compiled-catalog production: binary `.mo` files and script dictionaries.

use crate::utils::ui;
use anyhow::{Context as _, Result, bail};
use fs_err as fs;
use polib::po_file;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns the `.po` files in `dir`, sorted by name.
pub fn list_po_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut catalogs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "po"))
        .collect();
    catalogs.sort();
    Ok(catalogs)
}

/// Compiles every `.po` file in `po_dir` into `<po_dir>/<name>.mo`.
pub fn build_mo(compiler: &Path, po_dir: &Path, name: &str) -> Result<PathBuf> {
    let catalogs = list_po_files(po_dir)?;
    if catalogs.is_empty() {
        bail!("no .po files to compile in {}", po_dir.display());
    }

    let mo_path = po_dir.join(format!("{name}.mo"));

    let mut command = Command::new(compiler);
    command.arg("-c").arg("-o").arg(&mo_path).args(&catalogs);
    ui::print_command(&format_command(&command));

    let output = command
        .output()
        .with_context(|| format!("failed to run {}", compiler.display()))?;
    if !output.status.success() {
        bail!(
            "failed to build {}:\n{}{}",
            mo_path.display(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(mo_path)
}

/// Renders a `.po` catalog as a Lua table mapping each provenance reference
/// to its translation, falling back to the source string for untranslated
/// entries.
pub fn generate_script_dict(po_path: &Path, out_path: &Path) -> Result<()> {
    let catalog = po_file::parse(po_path)
        .with_context(|| format!("could not read po file at {}", po_path.display()))?;

    let mut dict = String::from("return {\n");
    for message in catalog.messages() {
        let text = match message.msgstr() {
            Ok(msgstr) if message.is_translated() => msgstr,
            _ => message.msgid(),
        };
        for occurrence in message.source().split_whitespace() {
            // A reference is `<name>` or `<name>:<line>`; the name is the key.
            let key = occurrence.split(':').next().unwrap_or(occurrence);
            dict.push_str(&format!("    {} = \"{}\",\n", key, escape_lua(text)));
        }
    }
    dict.push_str("}\n");

    fs::write(out_path, dict)?;
    Ok(())
}

fn escape_lua(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_command(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
