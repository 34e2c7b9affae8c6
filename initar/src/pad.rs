use std::fs::OpenOptions;
use std::path::Path;

use crate::Error;

/// Force the file at `path` to exactly `target_size` bytes. Shorter files are
/// extended with zero bytes, longer files are truncated; bytes before the cut
/// point are never touched.
pub fn pad_to(path: impl AsRef<Path>, target_size: u64) -> Result<(), Error> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| Error::Io {
            reason: format!("Open {}", path.display()),
            source: e,
        })?;

    let current_size = file
        .metadata()
        .map_err(|e| Error::Io {
            reason: format!("Stat {}", path.display()),
            source: e,
        })?
        .len();

    if current_size != target_size {
        file.set_len(target_size).map_err(|e| Error::Io {
            reason: format!("Resize {}", path.display()),
            source: e,
        })?;
    }

    Ok(())
}
