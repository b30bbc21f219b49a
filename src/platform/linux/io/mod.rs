use core::ffi::CStr;

use syscalls::{Errno, Sysno, syscall};

use crate::{
  internal::debug_trace,
  io::{
    IoError,
    fs::{AccessMode, FileHandle, FileSystem, SeekFrom},
  },
  num::to_file_offset,
  platform::linux::FileDescriptor,
};

mod flags;

pub use flags::{OpenFlags, Permissions};

/// [FileSystem] backed directly by Linux syscalls. Every call blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxIo;

impl LinuxIo {
  pub const STANDARD_INPUT: FileHandle = FileHandle::from_raw(libc::STDIN_FILENO as FileDescriptor);
  pub const STANDARD_OUTPUT: FileHandle = FileHandle::from_raw(libc::STDOUT_FILENO as FileDescriptor);
  pub const STANDARD_ERROR: FileHandle = FileHandle::from_raw(libc::STDERR_FILENO as FileDescriptor);

  pub const fn new() -> Self {
    Self
  }
}

fn checked_descriptor(handle: FileHandle) -> Result<FileDescriptor, IoError> {
  if handle.is_valid() {
    Ok(handle.as_raw())
  } else {
    Err(IoError::InvalidHandle)
  }
}

// the kernel never hands out descriptors above INT_MAX, so the return value fits
fn handle_from_ret(ret: usize) -> FileHandle {
  FileHandle::from_raw(ret as FileDescriptor)
}

impl FileSystem for LinuxIo {
  fn open(&self, path: &CStr, mode: AccessMode) -> Result<FileHandle, IoError> {
    let flags = OpenFlags::for_mode(mode);

    let ret = unsafe {
      syscall!(
        Sysno::openat,
        libc::AT_FDCWD,
        path.as_ptr(),
        flags.bits(),
        Permissions::CREATE_DEFAULT.bits()
      )
    }
    .map_err(|errno| {
      debug_trace!("openat({path:?}, {flags:?}) failed: {errno}");
      IoError::OpenFailed(errno)
    })?;

    Ok(handle_from_ret(ret))
  }

  fn close(&self, handle: FileHandle) {
    let Ok(file_descriptor) = checked_descriptor(handle) else {
      return;
    };

    if let Err(errno) = unsafe { syscall!(Sysno::close, file_descriptor) } {
      debug_trace!("close({file_descriptor}) failed: {errno}");
    }
  }

  fn read(&self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, IoError> {
    let file_descriptor = checked_descriptor(handle)?;

    unsafe { syscall!(Sysno::read, file_descriptor, buf.as_mut_ptr(), buf.len()) }.map_err(IoError::ReadFailed)
  }

  fn write(&self, handle: FileHandle, buf: &[u8]) -> Result<usize, IoError> {
    let file_descriptor = checked_descriptor(handle)?;

    unsafe { syscall!(Sysno::write, file_descriptor, buf.as_ptr(), buf.len()) }.map_err(IoError::WriteFailed)
  }

  fn seek_from(&self, handle: FileHandle, seek_from: SeekFrom) -> Result<u64, IoError> {
    let file_descriptor = checked_descriptor(handle)?;

    let (offset, whence) = match seek_from {
      SeekFrom::Start(position) => (to_file_offset(position), libc::SEEK_SET),
      SeekFrom::Current(delta) => (to_file_offset(delta), libc::SEEK_CUR),
      SeekFrom::End(delta) => (to_file_offset(delta), libc::SEEK_END),
    };
    let offset = offset.ok_or(IoError::SeekFailed(Errno::EOVERFLOW))?;

    let position = unsafe { syscall!(Sysno::lseek, file_descriptor, offset, whence) }.map_err(IoError::SeekFailed)?;

    Ok(position as u64)
  }

  fn duplicate(&self, handle: FileHandle) -> Result<FileHandle, IoError> {
    let file_descriptor = checked_descriptor(handle)?;

    let ret = unsafe { syscall!(Sysno::dup, file_descriptor) }.map_err(|errno| {
      debug_trace!("dup({file_descriptor}) failed: {errno}");
      IoError::DuplicateFailed(errno)
    })?;

    Ok(handle_from_ret(ret))
  }
}
