pub mod file;
#[cfg(feature = "record")]
pub mod record;

use core::ffi::CStr;

use super::IoError;

pub use file::File;

/// How a file is opened. Chosen once at open time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
  ReadOnly,
  WriteOnly,
  ReadWrite,
}

impl AccessMode {
  pub const fn can_read(self) -> bool {
    matches!(self, AccessMode::ReadOnly | AccessMode::ReadWrite)
  }

  pub const fn can_write(self) -> bool {
    matches!(self, AccessMode::WriteOnly | AccessMode::ReadWrite)
  }
}

/// An opaque identifier for an open OS-level file.
///
/// A handle owns nothing and is freely copyable; it stays valid from a successful
/// [open](FileSystem::open) until [close](FileSystem::close). [FileHandle::INVALID] never refers to a live
/// resource, and every operation rejects it with [IoError::InvalidHandle] before reaching the OS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FileHandle(u32);

impl FileHandle {
  pub const INVALID: Self = Self(u32::MAX);

  pub const fn from_raw(raw: u32) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> u32 {
    self.0
  }

  pub const fn is_valid(self) -> bool {
    self.0 != Self::INVALID.0
  }
}

impl Default for FileHandle {
  fn default() -> Self {
    Self::INVALID
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekFrom {
  Start(u64),
  Current(i64),
  End(i64),
}

/// Handle-oriented blocking file I/O.
///
/// Implementations map each required method onto exactly one OS call and surface failure immediately.
/// Short reads and writes are successes; looping is left to the caller (see
/// [record](crate::io::fs::record) for ready-made loops).
pub trait FileSystem {
  /// Opens (creating if missing) the file at `path`.
  ///
  /// New files get `rw-rw-rw-` permissions, masked by the process umask.
  fn open(&self, path: &CStr, mode: AccessMode) -> Result<FileHandle, IoError>;

  /// Releases the handle. Failures reported by the OS are ignored, and the handle must not be used again.
  fn close(&self, handle: FileHandle);

  /// Reads up to `buf.len()` bytes at the current position.
  ///
  /// `Ok(0)` for a non-empty `buf` means the position is at end of file.
  fn read(&self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, IoError>;

  /// Writes up to `buf.len()` bytes at the current position, returning how many were accepted.
  fn write(&self, handle: FileHandle, buf: &[u8]) -> Result<usize, IoError>;

  /// Repositions the handle, returning the new offset from the start of the file.
  fn seek_from(&self, handle: FileHandle, seek_from: SeekFrom) -> Result<u64, IoError>;

  /// Creates a second handle sharing the same open file, including its position.
  fn duplicate(&self, handle: FileHandle) -> Result<FileHandle, IoError>;

  /// Moves to an absolute offset. Offsets past the end are allowed and leave a hole on the next write.
  fn seek(&self, handle: FileHandle, position: u64) -> Result<u64, IoError> {
    self.seek_from(handle, SeekFrom::Start(position))
  }

  fn rewind(&self, handle: FileHandle) -> Result<(), IoError> {
    self.seek(handle, 0).map(|_| ())
  }

  fn tell(&self, handle: FileHandle) -> Result<u64, IoError> {
    self.seek_from(handle, SeekFrom::Current(0))
  }

  fn is_at_beginning(&self, handle: FileHandle) -> Result<bool, IoError> {
    Ok(self.tell(handle)? == 0)
  }

  /// Probes the end of file with a save, seek-to-end, restore sequence.
  ///
  /// The sequence is not atomic. If an error is returned, the position may have been left at the end.
  fn is_at_end(&self, handle: FileHandle) -> Result<bool, IoError> {
    let position = self.tell(handle)?;
    let end = self.seek_from(handle, SeekFrom::End(0))?;
    self.seek(handle, position)?;

    Ok(position == end)
  }
}
