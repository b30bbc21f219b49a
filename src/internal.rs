#[cfg(feature = "debugging")]
use core::fmt;

#[cfg(feature = "debugging")]
use syscalls::{Sysno, syscall};

#[cfg(feature = "debugging")]
#[derive(Default)]
#[doc(hidden)]
pub struct StderrFormat;

#[cfg(feature = "debugging")]
impl fmt::Write for StderrFormat {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    let mut remaining = s.as_bytes();
    while !remaining.is_empty() {
      // raw syscall so a failing write on stderr can't trace itself
      let written = unsafe { syscall!(Sysno::write, libc::STDERR_FILENO, remaining.as_ptr(), remaining.len()) }
        .map_err(|_| fmt::Error)?;
      if written == 0 {
        return Err(fmt::Error);
      }
      remaining = &remaining[written..];
    }

    Ok(())
  }
}

#[cfg(feature = "debugging")]
macro_rules! debug_trace {
  ($($arg: tt)*) => {
    {
      use ::core::fmt::Write;
      let _ = writeln!(&mut $crate::internal::StderrFormat::default(), $($arg)*);
    }
  };
}

#[cfg(not(feature = "debugging"))]
macro_rules! debug_trace {
  ($($arg: tt)*) => {
    if false {
      let _ = ::core::format_args!($($arg)*);
    }
  };
}

pub(crate) use debug_trace;
