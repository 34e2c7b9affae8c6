//! The rendered header is the on-wire format of a newc archive member.

use alloc::format;
use alloc::vec::Vec;

use crate::{Entry, Error};

/// ASCII magic identifying the newc CPIO variant
pub const MAGIC: &[u8; 6] = b"070701";

/// Byte length of the fixed header, before the NUL-terminated name
pub const HEADER_SIZE: usize = 110;

/// Name of the end-of-archive sentinel entry
pub const TRAILER_NAME: &str = "TRAILER!!!";

/// Zero bytes required after `len` payload bytes to reach a 4 byte boundary
pub fn pad_len(len: u64) -> usize {
    ((4 - len % 4) % 4) as usize
}

impl Entry {
    /// Render the 110 byte newc header followed by the NUL-terminated name,
    /// zero padded so that the payload (if any) starts 4 byte aligned.
    pub fn header_bytes(&self) -> Result<Vec<u8>, Error> {
        if self.name.is_empty() {
            return Err(Error::EmptyName);
        }
        let name_size = self.name.len() as u64 + 1;

        let mut header = Vec::with_capacity(HEADER_SIZE + name_size as usize + 3);
        header.extend_from_slice(MAGIC);
        push_hex(&mut header, "ino", 0)?;
        push_hex(&mut header, "mode", self.mode.bits() as u64)?;
        push_hex(&mut header, "uid", self.uid as u64)?;
        push_hex(&mut header, "gid", self.gid as u64)?;
        push_hex(&mut header, "nlink", 0)?;
        push_hex(&mut header, "mtime", self.mtime)?;
        push_hex(&mut header, "filesize", self.size)?;
        push_hex(&mut header, "devmajor", 0)?;
        push_hex(&mut header, "devminor", 0)?;
        push_hex(&mut header, "rdevmajor", 0)?;
        push_hex(&mut header, "rdevminor", 0)?;
        push_hex(&mut header, "namesize", name_size)?;
        push_hex(&mut header, "check", 0)?;

        header.extend_from_slice(self.name.as_bytes());
        header.push(0);
        header.resize(header.len() + pad_len(HEADER_SIZE as u64 + name_size), 0);
        Ok(header)
    }
}

/// One fixed-width lowercase hex field. Out-of-range values are rejected: a
/// wrapped field would desynchronize every offset behind it.
fn push_hex(header: &mut Vec<u8>, field: &'static str, value: u64) -> Result<(), Error> {
    if value > u32::MAX as u64 {
        return Err(Error::FieldOverflow { field, value });
    }
    header.extend_from_slice(format!("{:08x}", value).as_bytes());
    Ok(())
}
