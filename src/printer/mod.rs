use std::io::{self, Write};


/// Pass-through writer for rendered output
pub struct Printer<W: Write> {
    sink: W,
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write `bytes` unchanged, then a single `\n`
    pub fn print(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
