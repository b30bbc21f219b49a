use std::{ffi::CString, fs, os::unix::ffi::OsStrExt, path::Path};

use fdhandle::{
  io::fs::record::{read_exact, write_all},
  prelude::*,
};
use tempfile::TempDir;
use test_case::test_case;

fn c_path(path: &Path) -> CString {
  CString::new(path.as_os_str().as_bytes()).expect("temporary path contains NUL")
}

#[test]
fn hello_scenario() {
  let dir = TempDir::new().expect("Unable to create temporary directory");
  let path = dir.path().join("test.txt");
  let io = LinuxIo::new();

  let handle = io.open(&c_path(&path), AccessMode::ReadWrite).expect("open failed");
  assert_eq!(io.write(handle, b"hello"), Ok(5));
  assert_eq!(io.seek(handle, 0), Ok(0));

  let mut buf = [0u8; 5];
  assert_eq!(io.read(handle, &mut buf), Ok(5));
  assert_eq!(&buf, b"hello");
  assert_eq!(io.tell(handle), Ok(5));
  assert_eq!(io.is_at_end(handle), Ok(true));
  assert_eq!(io.tell(handle), Ok(5));
  io.close(handle);

  assert_eq!(fs::read(&path).unwrap(), b"hello");
}

#[test_case(b""; "empty")]
#[test_case(b"x"; "one byte")]
#[test_case(&[0u8; 4096]; "one page of zeros")]
fn round_trip(data: &[u8]) {
  let dir = TempDir::new().expect("Unable to create temporary directory");
  let mut file = File::open(&LinuxIo, &c_path(&dir.path().join("round")), AccessMode::ReadWrite).unwrap();

  write_all(&mut file, data).unwrap();
  assert_eq!(file.tell(), Ok(data.len() as u64));
  assert_eq!(file.is_at_beginning(), Ok(data.is_empty()));

  file.rewind().unwrap();
  let mut read_back = vec![0u8; data.len()];
  read_exact(&mut file, &mut read_back).unwrap();
  assert_eq!(read_back, data);
  assert_eq!(file.is_at_end(), Ok(true));
}

#[test]
fn closing_a_duplicate_keeps_the_original() {
  let dir = TempDir::new().expect("Unable to create temporary directory");
  let file = File::open(&LinuxIo, &c_path(&dir.path().join("dup")), AccessMode::ReadWrite).unwrap();

  let duplicate = file.try_clone().unwrap();
  duplicate.write(b"abc").unwrap();
  assert_eq!(file.tell(), Ok(3));
  drop(duplicate);

  assert_eq!(file.write(b"def"), Ok(3));
  file.rewind().unwrap();
  let mut buf = [0u8; 6];
  assert_eq!(file.read(&mut buf), Ok(6));
  assert_eq!(&buf, b"abcdef");
}

#[test]
fn failed_open_reports_errno() {
  let dir = TempDir::new().expect("Unable to create temporary directory");
  let error = LinuxIo
    .open(&c_path(&dir.path().join("nope").join("file")), AccessMode::WriteOnly)
    .unwrap_err();

  assert_eq!(error.errno().map(|errno| errno.into_raw()), Some(libc::ENOENT));
  assert!(matches!(error, IoError::OpenFailed(_)));
}
