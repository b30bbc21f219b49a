pub mod error;
pub mod fs;

pub use error::IoError;

/// A single blocking write into a stream.
///
/// On success `buf` is advanced past the bytes that were written, which may be fewer than requested.
pub trait StreamWriter {
  type WriteError;
  fn write(&mut self, buf: &mut &[u8]) -> Result<(), Self::WriteError>;
}

/// A single blocking read from a stream.
///
/// On success `buf` is advanced past the bytes that were filled. If it was non-empty and is left untouched,
/// the stream has reached its end.
pub trait StreamReader {
  type ReadError;
  fn read(&mut self, buf: &mut &mut [u8]) -> Result<(), Self::ReadError>;
}
