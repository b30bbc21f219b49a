//! A thin, handle-oriented facade over POSIX file descriptors: open, close, read, write, seek, tell,
//! duplicate and boundary checks, each one blocking OS call with a typed error.
#![no_std]

#[cfg(not(target_os = "linux"))]
compile_error!("fdhandle only supports Linux targets.");

#[cfg(test)]
#[macro_use]
#[allow(unused)]
extern crate std;

mod internal;
pub mod io;
mod num;
pub mod platform;

#[cfg(feature = "record")]
pub use zerocopy;

pub mod prelude {
  pub use crate::io::{
    IoError, StreamReader, StreamWriter,
    fs::{AccessMode, File, FileHandle, FileSystem, SeekFrom},
  };
  pub use crate::platform::active::io::LinuxIo;
}
