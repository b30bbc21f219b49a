use fdhandle::{io::fs::record::write_all, prelude::*};
use scratchpad::{DemoError, path_arg, println, run};

const USAGE: &str = "copy <source> <destination>";

fn main() {
  run(|| {
    let source = File::open(&LinuxIo, &path_arg(1, USAGE)?, AccessMode::ReadOnly)?;
    // opened without truncation, so a longer destination keeps its tail
    let mut destination = File::open(&LinuxIo, &path_arg(2, USAGE)?, AccessMode::WriteOnly)?;

    let mut buf = [0u8; 4096];
    let mut total = 0u64;
    loop {
      let read = source.read(&mut buf)?;
      if read == 0 {
        break;
      }
      write_all(&mut destination, &buf[..read])?;
      total += read as u64;
    }

    println!("copied {total} bytes");
    Ok::<(), DemoError>(())
  });
}
