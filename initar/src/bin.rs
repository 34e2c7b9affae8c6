use std::fs;
use std::path::Path;

use crate::{Error, ImageBuilder};

/// Assets embedded under `/assets` when present in the assets directory.
/// Missing entries are warnings, not failures.
const OPTIONAL_ASSETS: &[&str] = &["cursor.png"];

/// Generate an initrd image at `archive_path` from the contents of
/// `assets_dir`, printing a short summary of what was included.
pub fn create(archive_path: &str, assets_dir: &str) -> Result<(), Error> {
    if let Some(parent) = Path::new(archive_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                reason: format!("Create {}", parent.display()),
                source: e,
            })?;
        }
    }

    println!("Generating initrd: {}", archive_path);
    println!("Assets directory: {}", assets_dir);

    let mut builder = ImageBuilder::new();
    builder.directory("/");
    builder.directory("/assets");
    for asset in OPTIONAL_ASSETS {
        let source = Path::new(assets_dir).join(asset);
        let target = format!("/assets/{}", asset);
        if source.exists() {
            println!("Adding {} -> {}", source.display(), target);
        }
        builder.file(source, target);
    }

    let mut archive = fs::File::create(archive_path).map_err(|e| Error::Io {
        reason: format!("Create {}", archive_path),
        source: e,
    })?;
    let size = builder.write_archive(&mut archive)?;

    println!("Initrd created: {} ({} bytes)", archive_path, size);
    Ok(())
}
