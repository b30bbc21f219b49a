pub mod io;

// these are unix types, and exposed under active on unix platforms
pub type MaybeFileDescriptor = i32;
pub type FileDescriptor = u32;
