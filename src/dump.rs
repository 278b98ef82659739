use std::io::{self, Read, Write};

use crate::line::AsciiBuf;

/// Number of bytes rendered per output line.
pub const WINDOW_WIDTH: usize = 16;

/// One run of the dump formatter over a single input stream.
///
/// Owns the output sink and the state carried between lines: the running
/// byte offset and whether the heading has gone out.
#[derive(Debug)]
pub struct DumpSession<W> {
    out: W,
    bytes_consumed: u64,
    heading_emitted: bool,
}

/// What `produce_line` saw while filling one window.
#[derive(Debug, Clone, Copy)]
pub struct LineStatus {
    /// Bytes actually read in this call, `0..=WINDOW_WIDTH`.
    pub bytes_read: usize,
    pub end_of_stream: bool,
}

impl<W: Write> DumpSession<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bytes_consumed: 0,
            heading_emitted: false,
        }
    }

    /// Label line naming the source, column indices `0..WINDOW_WIDTH`
    /// right-justified in 3-character fields, then a blank line.
    ///
    /// Panics if called twice.
    pub fn emit_heading(&mut self, source_name: &str) -> io::Result<()> {
        assert!(!self.heading_emitted, "heading already emitted");
        self.heading_emitted = true;

        writeln!(self.out, "Hex/ASCII: {source_name}")?;
        for k in 0..WINDOW_WIDTH {
            write!(self.out, "{k:3}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out)
    }

    /// Read up to one window of bytes and print it as one line.
    ///
    /// Slots past end-of-stream render as `" XX"` in the hex columns and
    /// leave the ASCII field untouched, so a short final window shows
    /// ASCII only for the bytes actually read.
    pub fn produce_line(&mut self, input: &mut impl Read) -> io::Result<LineStatus> {
        debug_assert!(self.heading_emitted);

        let mut ascii = AsciiBuf::new();
        let mut bytes_read = 0;
        let mut end_of_stream = false;

        for _ in 0..WINDOW_WIDTH {
            let byte = if end_of_stream { None } else { read_byte(input)? };
            match byte {
                Some(b) => {
                    write!(self.out, "{b:3x}")?;
                    ascii.push(printable(b));
                    bytes_read += 1;
                }
                None => {
                    end_of_stream = true;
                    self.out.write_all(b" XX")?;
                }
            }
        }

        self.bytes_consumed += bytes_read as u64;
        writeln!(self.out, " - {:7} {}", self.bytes_consumed, ascii)?;

        Ok(LineStatus {
            bytes_read,
            end_of_stream,
        })
    }

    /// Heading plus one line per window, until the input runs dry.
    ///
    /// End-of-stream is only observed inside the window loop, so an input
    /// of exactly N windows ends in one extra all-placeholder line before
    /// the loop halts.
    pub fn run(mut self, source_name: &str, input: &mut impl Read) -> io::Result<()> {
        self.emit_heading(source_name)?;
        loop {
            let status = self.produce_line(input)?;
            if status.end_of_stream {
                return Ok(());
            }
        }
    }
}

/// Printable bytes pass through; everything else becomes '.'.
fn printable(b: u8) -> u8 {
    if b > 31 && b < 128 {
        b
    } else {
        b'.'
    }
}

fn read_byte(input: &mut impl Read) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
