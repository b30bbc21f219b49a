//! Loops for callers that need a whole buffer or a whole value moved, built on the single-call stream traits.
//!
//! Interrupted calls are retried; any other failure is returned as-is.

use syscalls::Errno;
use thiserror::Error;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::io::{IoError, StreamReader, StreamWriter};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
  #[error(transparent)]
  Io(#[from] IoError),
  #[error("end of file after {actual} of {expected} bytes")]
  Truncated { expected: usize, actual: usize },
  #[error("no bytes were accepted by the writer")]
  WriteZero,
}

fn is_interrupted(error: &IoError) -> bool {
  error.errno() == Some(Errno::EINTR)
}

/// Fills `buf` completely, failing with [RecordError::Truncated] if the end of file comes first.
pub fn read_exact<R: StreamReader<ReadError = IoError>>(reader: &mut R, buf: &mut [u8]) -> Result<(), RecordError> {
  let expected = buf.len();
  let mut remaining = buf;

  while !remaining.is_empty() {
    let before = remaining.len();
    match reader.read(&mut remaining) {
      Ok(()) if remaining.len() == before => {
        return Err(RecordError::Truncated {
          expected,
          actual: expected - before,
        });
      }
      Ok(()) => {}
      Err(error) if is_interrupted(&error) => {}
      Err(error) => return Err(error.into()),
    }
  }

  Ok(())
}

/// Writes all of `buf`, re-issuing writes after short counts.
pub fn write_all<W: StreamWriter<WriteError = IoError>>(writer: &mut W, mut buf: &[u8]) -> Result<(), RecordError> {
  while !buf.is_empty() {
    let before = buf.len();
    match writer.write(&mut buf) {
      Ok(()) if buf.len() == before => return Err(RecordError::WriteZero),
      Ok(()) => {}
      Err(error) if is_interrupted(&error) => {}
      Err(error) => return Err(error.into()),
    }
  }

  Ok(())
}

/// Reads one fixed-layout value in its in-memory byte order.
pub fn read_record<T: FromBytes + IntoBytes, R: StreamReader<ReadError = IoError>>(
  reader: &mut R,
) -> Result<T, RecordError> {
  let mut value = T::new_zeroed();
  read_exact(reader, value.as_mut_bytes())?;
  Ok(value)
}

pub fn write_record<T: IntoBytes + Immutable + ?Sized, W: StreamWriter<WriteError = IoError>>(
  writer: &mut W,
  value: &T,
) -> Result<(), RecordError> {
  write_all(writer, value.as_bytes())
}
