use fdhandle::prelude::*;
use scratchpad::{DemoError, path_arg, println, run};

fn main() {
  run(|| {
    let path = path_arg(1, "scenario <file>").unwrap_or_else(|_| c"test.txt".to_owned());
    let file = File::open(&LinuxIo, &path, AccessMode::ReadWrite)?;

    let written = file.write(b"hello")?;
    println!("wrote {written} bytes");

    file.seek(0)?;
    let mut buf = [0u8; 5];
    let read = file.read(&mut buf)?;
    println!("read {:?}", String::from_utf8_lossy(&buf[..read]));
    println!("tell = {}, at end = {}", file.tell()?, file.is_at_end()?);

    Ok::<(), DemoError>(())
  });
}
