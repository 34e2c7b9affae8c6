use alloc::string::String;

use crate::{Mode, TRAILER_NAME};

/// Metadata for one archive member.
///
/// `size` and `mtime` are carried as `u64` so that out-of-range filesystem
/// values reach the encoder and fail there instead of wrapping silently.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Archive path, forward-slash separated
    pub name: String,
    /// Unix kind and permission bits
    pub mode: Mode,
    pub uid: u32,
    pub gid: u32,
    /// Payload length in bytes; 0 for directories and the trailer
    pub size: u64,
    /// Modification time, seconds since the epoch
    pub mtime: u64,
}

impl Entry {
    /// A regular file entry. `perm` carries only permission bits; the kind
    /// bits are set here.
    pub fn file(name: impl Into<String>, perm: Mode, size: u64, mtime: u64) -> Entry {
        Entry {
            name: name.into(),
            mode: perm.perm() | Mode::FILE,
            uid: 0,
            gid: 0,
            size,
            mtime,
        }
    }

    /// A directory entry. Directories never carry payload.
    pub fn directory(name: impl Into<String>, perm: Mode) -> Entry {
        Entry {
            name: name.into(),
            mode: perm.perm() | Mode::DIR,
            uid: 0,
            gid: 0,
            size: 0,
            mtime: 0,
        }
    }

    /// The end-of-archive sentinel. Every numeric field is zero; readers stop
    /// parsing when they reach it.
    pub fn trailer() -> Entry {
        Entry {
            name: String::from(TRAILER_NAME),
            mode: Mode::empty(),
            uid: 0,
            gid: 0,
            size: 0,
            mtime: 0,
        }
    }

    pub fn is_trailer(&self) -> bool {
        self.name == TRAILER_NAME
    }
}
