mod bin;
mod builder;
mod pad;

pub use bin::*;
pub use builder::*;
pub use pad::*;

use std::error::Error as StdError;
use std::fmt;
use std::io;

#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] initar_core::Error),
    #[error("{reason}")]
    Io {
        reason: String,
        #[source]
        source: io::Error,
    },
    #[error("Entry size mismatch: expected {expected}, got {actual}")]
    LengthMismatch { actual: u64, expected: u64 },
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;

        let mut source = self.source();
        while let Some(err) = source {
            writeln!(f, "\tCaused by: {err}")?;
            source = err.source();
        }

        Ok(())
    }
}
