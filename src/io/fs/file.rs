use core::{ffi::CStr, mem};

use crate::io::{IoError, StreamReader, StreamWriter};

use super::{AccessMode, FileHandle, FileSystem, SeekFrom};

/// An open file that closes its handle when dropped.
#[derive(Debug)]
pub struct File<'a, F: FileSystem> {
  file_system: &'a F,
  handle: FileHandle,
}

impl<'a, F: FileSystem> File<'a, F> {
  pub fn open(file_system: &'a F, path: &CStr, mode: AccessMode) -> Result<Self, IoError> {
    let handle = file_system.open(path, mode)?;
    Ok(Self { file_system, handle })
  }

  /// Takes ownership of an already open handle. It is closed when the returned file is dropped.
  pub fn from_handle(file_system: &'a F, handle: FileHandle) -> Self {
    Self { file_system, handle }
  }

  pub fn handle(&self) -> FileHandle {
    self.handle
  }

  /// Gives up ownership without closing the handle.
  pub fn into_handle(self) -> FileHandle {
    let handle = self.handle;
    mem::forget(self);
    handle
  }

  /// Duplicates the handle into a second owner sharing this file's position.
  pub fn try_clone(&self) -> Result<Self, IoError> {
    let handle = self.file_system.duplicate(self.handle)?;
    Ok(Self::from_handle(self.file_system, handle))
  }

  pub fn read(&self, buf: &mut [u8]) -> Result<usize, IoError> {
    self.file_system.read(self.handle, buf)
  }

  pub fn write(&self, buf: &[u8]) -> Result<usize, IoError> {
    self.file_system.write(self.handle, buf)
  }

  pub fn seek(&self, position: u64) -> Result<u64, IoError> {
    self.file_system.seek(self.handle, position)
  }

  pub fn seek_from(&self, seek_from: SeekFrom) -> Result<u64, IoError> {
    self.file_system.seek_from(self.handle, seek_from)
  }

  pub fn rewind(&self) -> Result<(), IoError> {
    self.file_system.rewind(self.handle)
  }

  pub fn tell(&self) -> Result<u64, IoError> {
    self.file_system.tell(self.handle)
  }

  pub fn is_at_beginning(&self) -> Result<bool, IoError> {
    self.file_system.is_at_beginning(self.handle)
  }

  pub fn is_at_end(&self) -> Result<bool, IoError> {
    self.file_system.is_at_end(self.handle)
  }
}

impl<F: FileSystem> Drop for File<'_, F> {
  fn drop(&mut self) {
    self.file_system.close(self.handle);
  }
}

impl<F: FileSystem> StreamReader for File<'_, F> {
  type ReadError = IoError;

  fn read(&mut self, buf: &mut &mut [u8]) -> Result<(), IoError> {
    let count = self.file_system.read(self.handle, buf)?;
    *buf = &mut mem::take(buf)[count..];
    Ok(())
  }
}

impl<F: FileSystem> StreamWriter for File<'_, F> {
  type WriteError = IoError;

  fn write(&mut self, buf: &mut &[u8]) -> Result<(), IoError> {
    let count = self.file_system.write(self.handle, buf)?;
    *buf = &buf[count..];
    Ok(())
  }
}
