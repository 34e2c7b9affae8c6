use std::fmt;
use std::fs::{self, File, Metadata};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use initar_core::{pad_len, Entry, Mode};

use crate::Error;

const FILE_PERM: Mode = Mode::from_bits_truncate(0o644);
const DIR_PERM: Mode = Mode::from_bits_truncate(0o755);

const PADDING: [u8; 3] = [0; 3];

#[derive(Debug)]
struct BuilderEntry {
    /// Archive path for the entry
    target: String,

    kind: BuilderEntryKind,
}

enum BuilderEntryKind {
    /// Directory entry, header only
    Dir,

    /// Path to a regular file during build
    File(PathBuf),

    /// File contents supplied by a reader instead of the filesystem
    Reader(Box<dyn Read>),
}

impl fmt::Debug for BuilderEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BuilderEntryKind::*;
        match self {
            Dir => write!(f, "BuilderEntryKind::Dir"),
            File(p) => write!(f, "BuilderEntryKind::File({:?})", p),
            Reader(_) => write!(f, "BuilderEntryKind::Reader(_)"),
        }
    }
}

/// Builder pattern for constructing initrd images. Holds a list of entries
/// and consumes itself to stream a newc archive.
///
/// Entries are written in insertion order: list a directory before the files
/// inside it. The end-of-archive trailer is appended automatically after the
/// last entry.
///
/// A [`ImageBuilder::file`] entry whose source is missing at write time is
/// skipped with a warning; the archive is still produced without it.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use initar::ImageBuilder;
///
/// let mut image = Cursor::new(Vec::new());
///
/// let mut builder = ImageBuilder::new();
/// builder.directory("/");
/// builder.directory("/assets");
/// builder.file_reader(&b"cursor pixels"[..], "/assets/cursor.png");
///
/// builder.write_archive(&mut image).unwrap();
/// ```
pub struct ImageBuilder {
    entries: Vec<BuilderEntry>,
}

impl ImageBuilder {
    pub fn new() -> ImageBuilder {
        ImageBuilder {
            entries: Vec::new(),
        }
    }

    /// Add a directory entry. Directories never carry payload bytes.
    pub fn directory(&mut self, target: impl Into<String>) -> &mut ImageBuilder {
        self.entries.push(BuilderEntry {
            target: target.into(),
            kind: BuilderEntryKind::Dir,
        });
        self
    }

    /// Add a regular file. `source` is the position of the file on the build
    /// system; `target` is the path stored in the archive.
    pub fn file(
        &mut self,
        source: impl AsRef<Path>,
        target: impl Into<String>,
    ) -> &mut ImageBuilder {
        self.entries.push(BuilderEntry {
            target: target.into(),
            kind: BuilderEntryKind::File(source.as_ref().to_path_buf()),
        });
        self
    }

    /// Add a file whose contents come from a reader instead of the
    /// filesystem. Reader entries carry an mtime of 0.
    pub fn file_reader(
        &mut self,
        source: impl Read + 'static,
        target: impl Into<String>,
    ) -> &mut ImageBuilder {
        self.entries.push(BuilderEntry {
            target: target.into(),
            kind: BuilderEntryKind::Reader(Box::new(source)),
        });
        self
    }

    /// Consume this `ImageBuilder`, streaming every entry and the trailer
    /// into `w`. Returns the total number of bytes written.
    pub fn write_archive<W: Write>(self, w: &mut W) -> Result<u64, Error> {
        let mut written = 0;

        for builder_entry in self.entries {
            let target = builder_entry.target;
            written += match builder_entry.kind {
                BuilderEntryKind::Dir => {
                    write_entry(w, &Entry::directory(target, DIR_PERM), io::empty())?
                }
                BuilderEntryKind::File(source) => {
                    let metadata = match fs::metadata(&source) {
                        Ok(metadata) => metadata,
                        Err(err) if err.kind() == io::ErrorKind::NotFound => {
                            log::warn!("{} does not exist, skipping", source.display());
                            continue;
                        }
                        Err(err) => {
                            return Err(Error::Io {
                                reason: format!("Stat {}", source.display()),
                                source: err,
                            });
                        }
                    };
                    let file = File::open(&source).map_err(|e| Error::Io {
                        reason: format!("Open {}", source.display()),
                        source: e,
                    })?;
                    let entry = Entry::file(target, FILE_PERM, metadata.len(), mtime(&metadata));
                    write_entry(w, &entry, file)?
                }
                BuilderEntryKind::Reader(mut source) => {
                    let mut data = Vec::new();
                    source.read_to_end(&mut data).map_err(|e| Error::Io {
                        reason: format!("Read source for {}", target),
                        source: e,
                    })?;
                    let entry = Entry::file(target, FILE_PERM, data.len() as u64, 0);
                    write_entry(w, &entry, &data[..])?
                }
            };
        }

        written += write_entry(w, &Entry::trailer(), io::empty())?;
        Ok(written)
    }
}

impl fmt::Debug for ImageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageBuilder")
            .field("entries", &self.entries)
            .finish()
    }
}

/// Seconds since the epoch; unavailable or pre-epoch times render as 0
fn mtime(metadata: &Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|since| since.as_secs())
        .unwrap_or(0)
}

/// Write one header and its payload, padded to a 4 byte boundary. The copied
/// byte count must match the size already committed to in the header.
fn write_entry<W: Write>(w: &mut W, entry: &Entry, mut data: impl Read) -> Result<u64, Error> {
    let header = entry.header_bytes()?;
    w.write_all(&header).map_err(write_err)?;

    let copied = io::copy(&mut data, w).map_err(write_err)?;
    if copied != entry.size {
        return Err(Error::LengthMismatch {
            actual: copied,
            expected: entry.size,
        });
    }

    let pad = pad_len(copied);
    w.write_all(&PADDING[..pad]).map_err(write_err)?;

    Ok(header.len() as u64 + copied + pad as u64)
}

fn write_err(source: io::Error) -> Error {
    Error::Io {
        reason: String::from("Write archive"),
        source,
    }
}
