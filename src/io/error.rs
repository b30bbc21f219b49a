use syscalls::Errno;
use thiserror::Error;

/// A failed operation on a [FileHandle](super::fs::FileHandle).
///
/// Every variant except [IoError::InvalidHandle] carries the error number the kernel reported.
/// Nothing is retried before one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IoError {
  #[error("failed to open file: {0}")]
  OpenFailed(Errno),
  #[error("failed to read from file: {0}")]
  ReadFailed(Errno),
  #[error("failed to write to file: {0}")]
  WriteFailed(Errno),
  #[error("failed to reposition file: {0}")]
  SeekFailed(Errno),
  #[error("failed to duplicate file handle: {0}")]
  DuplicateFailed(Errno),
  /// The handle was the invalid tag; no syscall was attempted.
  #[error("operation on an invalid file handle")]
  InvalidHandle,
}

impl IoError {
  /// The error number reported by the OS, if the failure came from a syscall.
  pub fn errno(&self) -> Option<Errno> {
    match *self {
      IoError::OpenFailed(errno)
      | IoError::ReadFailed(errno)
      | IoError::WriteFailed(errno)
      | IoError::SeekFailed(errno)
      | IoError::DuplicateFailed(errno) => Some(errno),
      IoError::InvalidHandle => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use syscalls::Errno;

  use super::IoError;

  #[test]
  fn errno_is_exposed_for_syscall_failures() {
    assert_eq!(IoError::SeekFailed(Errno::ESPIPE).errno(), Some(Errno::ESPIPE));
    assert_eq!(IoError::OpenFailed(Errno::ENOENT).errno().map(Errno::into_raw), Some(libc::ENOENT));
    assert_eq!(IoError::InvalidHandle.errno(), None);
  }

  #[test]
  fn display_names_the_operation() {
    assert!(IoError::WriteFailed(Errno::ENOSPC).to_string().starts_with("failed to write to file"));
    assert_eq!(IoError::InvalidHandle.to_string(), "operation on an invalid file handle");
  }
}
