use fdhandle::prelude::*;
use scratchpad::{DemoError, path_arg, println, run};

fn main() {
  run(|| {
    let file = File::open(&LinuxIo, &path_arg(1, "probe <file>")?, AccessMode::ReadOnly)?;

    let size = file.seek_from(SeekFrom::End(0))?;
    file.seek(size / 2)?;
    println!("size = {size}, tell = {}", file.tell()?);
    println!("at beginning = {}, at end = {}", file.is_at_beginning()?, file.is_at_end()?);

    let duplicate = file.try_clone()?;
    duplicate.rewind()?;
    println!(
      "handle {} duplicated as {}, original now at {}",
      file.handle().as_raw(),
      duplicate.handle().as_raw(),
      file.tell()?
    );

    Ok::<(), DemoError>(())
  });
}
