use bitflags::bitflags;

use crate::io::fs::AccessMode;

bitflags! {
  /// Flags passed to `openat`. Read-only access has no bit of its own (`O_RDONLY` is zero).
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct OpenFlags: i32 {
    const WRITE_ONLY = libc::O_WRONLY;
    const READ_WRITE = libc::O_RDWR;
    const CREATE = libc::O_CREAT;
  }

  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct Permissions: u32 {
    const OWNER_READ = libc::S_IRUSR as u32;
    const OWNER_WRITE = libc::S_IWUSR as u32;
    const GROUP_READ = libc::S_IRGRP as u32;
    const GROUP_WRITE = libc::S_IWGRP as u32;
    const OTHER_READ = libc::S_IROTH as u32;
    const OTHER_WRITE = libc::S_IWOTH as u32;
    /// `rw-rw-rw-`, left for the umask to narrow.
    const CREATE_DEFAULT = Self::OWNER_READ.bits()
      | Self::OWNER_WRITE.bits()
      | Self::GROUP_READ.bits()
      | Self::GROUP_WRITE.bits()
      | Self::OTHER_READ.bits()
      | Self::OTHER_WRITE.bits();
  }
}

impl OpenFlags {
  pub const fn for_mode(mode: AccessMode) -> Self {
    match mode {
      AccessMode::ReadOnly => Self::CREATE,
      AccessMode::WriteOnly => Self::WRITE_ONLY.union(Self::CREATE),
      AccessMode::ReadWrite => Self::READ_WRITE.union(Self::CREATE),
    }
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::{AccessMode, OpenFlags, Permissions};

  #[test_case(AccessMode::ReadOnly, libc::O_RDONLY | libc::O_CREAT; "read only")]
  #[test_case(AccessMode::WriteOnly, libc::O_WRONLY | libc::O_CREAT; "write only")]
  #[test_case(AccessMode::ReadWrite, libc::O_RDWR | libc::O_CREAT; "read write")]
  fn flags_for_mode(mode: AccessMode, expected: i32) {
    assert_eq!(OpenFlags::for_mode(mode).bits(), expected);
  }

  #[test]
  fn default_permissions_are_0666() {
    assert_eq!(Permissions::CREATE_DEFAULT.bits(), 0o666);
  }
}
