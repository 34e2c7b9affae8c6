bitflags::bitflags! {
    /// Unix mode bits as stored in the header's mode field.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Mode: u32 {
        /// Permission bits (user, group, other with read, write, execute)
        const PERM = 0o007777;
        /// File kind bits
        const KIND = 0o170000;
        const FILE = 0o100000;
        const DIR = 0o040000;
    }
}

impl Mode {
    /// Only the permission bits of this mode
    pub fn perm(self) -> Mode {
        self & Mode::PERM
    }

    /// Only the kind bits of this mode
    pub fn kind(self) -> Mode {
        self & Mode::KIND
    }

    pub fn is_file(self) -> bool {
        self.kind() == Mode::FILE
    }

    pub fn is_dir(self) -> bool {
        self.kind() == Mode::DIR
    }
}
