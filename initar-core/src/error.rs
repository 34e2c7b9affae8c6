use core::error;
use core::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    EmptyName,
    FieldOverflow { field: &'static str, value: u64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Error::EmptyName => write!(f, "Empty entry name"),
            Error::FieldOverflow { field, value } => {
                write!(f, "Header field {} out of range: {:#x}", field, value)
            }
        }
    }
}

impl error::Error for Error {}
