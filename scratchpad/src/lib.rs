use std::{ffi::CString, fmt, os::unix::ffi::OsStringExt};

use fdhandle::{
  io::fs::record::{RecordError, write_all},
  prelude::*,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
  #[error("usage: {0}")]
  Usage(&'static str),
  #[error("path contains a NUL byte")]
  InvalidPath,
  #[error(transparent)]
  Io(#[from] IoError),
  #[error(transparent)]
  Record(#[from] RecordError),
}

/// Reads the `index`th command line argument as a path.
pub fn path_arg(index: usize, usage: &'static str) -> Result<CString, DemoError> {
  let arg = std::env::args_os().nth(index).ok_or(DemoError::Usage(usage))?;
  CString::new(arg.into_vec()).map_err(|_| DemoError::InvalidPath)
}

pub fn run(main: impl FnOnce() -> Result<(), DemoError>) {
  if let Err(error) = main() {
    eprintln!("error: {error}");
    std::process::exit(libc::EXIT_FAILURE);
  }
}

#[derive(Default)]
#[doc(hidden)]
pub struct StdoutFormat;
impl fmt::Write for StdoutFormat {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    let mut stdout = File::from_handle(&LinuxIo, LinuxIo::STANDARD_OUTPUT);
    let result = write_all(&mut stdout, s.as_bytes()).map_err(|_| fmt::Error);
    // stdout outlives the demo
    stdout.into_handle();
    result
  }
}

#[macro_export]
#[doc(hidden)]
macro_rules! println {
  () => {
    $crate::println!("")
  };
  ($($arg: tt)*) => {
    {
      use ::core::fmt::Write;
      writeln!(&mut $crate::StdoutFormat::default(), $($arg)*).expect("failed to print message");
    }
  };
}
