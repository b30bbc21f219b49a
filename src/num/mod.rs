use num_traits::{NumCast, ToPrimitive};

/// Converts an offset to the platform's `off_t`, whose width differs between targets.
pub fn to_file_offset<T: ToPrimitive>(value: T) -> Option<libc::off_t> {
  <libc::off_t as NumCast>::from(value)
}
