//! Builds a template from a directory of plain-text asset files.
//!
//! Some projects keep their translatable strings as one file per string
//! instead of extracted templates. Each asset file becomes one entry whose
//! msgid is the file contents and whose provenance reference is the file
//! name.

use anyhow::{Context as _, Result};
use fs_err as fs;
use polib::catalog::Catalog;
use polib::message::Message;
use polib::metadata::CatalogMetadata;
use polib::po_file;
use std::path::{Path, PathBuf};

/// Compiles every file in `assets_dir` into `<pot_dir>/assets.pot`.
pub fn assets_to_pot(assets_dir: &Path, pot_dir: &Path, project: &str) -> Result<PathBuf> {
    let now = jiff::Zoned::now()
        .strftime("%Y-%m-%d %H:%M%z")
        .to_string();

    let mut metadata = CatalogMetadata::new();
    metadata.project_id_version = project.to_string();
    metadata.pot_creation_date = now.clone();
    metadata.po_revision_date = now;
    metadata.language_team = "English".to_string();
    metadata.mime_version = "1.0".to_string();
    metadata.content_type = "text/plain; charset=utf-8".to_string();
    metadata.content_transfer_encoding = "8bit".to_string();

    let mut catalog = Catalog::new(metadata);

    let mut assets: Vec<PathBuf> = fs::read_dir(assets_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    assets.sort();

    for asset in &assets {
        let contents = fs::read_to_string(asset)
            .with_context(|| format!("failed to read asset {}", asset.display()))?;
        let name = asset
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let message = Message::build_singular()
            .with_source(name)
            .with_msgid(contents)
            .with_msgstr(String::new())
            .done();
        catalog.append_or_update(message);
    }

    let pot_path = pot_dir.join("assets.pot");
    po_file::write(&catalog, &pot_path)
        .with_context(|| format!("failed to write {}", pot_path.display()))?;

    Ok(pot_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_assets_become_entries() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        let pot_dir = tmp.path().join("pot");
        std::fs::create_dir(&assets).unwrap();
        std::fs::create_dir(&pot_dir).unwrap();

        std::fs::write(assets.join("intro.txt"), "Welcome, adventurer!").unwrap();
        std::fs::write(assets.join("outro.txt"), "Farewell.").unwrap();

        let pot_path = assets_to_pot(&assets, &pot_dir, "quest").unwrap();
        assert_eq!(pot_path, pot_dir.join("assets.pot"));

        let catalog = po_file::parse(&pot_path).unwrap();
        let msgids: Vec<&str> = catalog.messages().map(|m| m.msgid()).collect();
        assert!(msgids.contains(&"Welcome, adventurer!"));
        assert!(msgids.contains(&"Farewell."));

        let content = std::fs::read_to_string(&pot_path).unwrap();
        assert!(content.contains("#: intro.txt"));
        assert!(content.contains("quest"));
    }

    #[test]
    fn test_empty_assets_dir_writes_header_only_template() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        std::fs::create_dir(&assets).unwrap();

        let pot_path = assets_to_pot(&assets, tmp.path(), "quest").unwrap();

        let catalog = po_file::parse(&pot_path).unwrap();
        assert_eq!(catalog.messages().count(), 0);
    }
}
