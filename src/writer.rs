//! Row sink: newline-joined rows with no trailing newline

use std::io::{self, Write};

/// Writes rows separated by `\n`, suppressing the separator before the
/// first row so the output carries no trailing newline. Replaces the
/// usual "first line" flag with a row-count check, which doubles as the
/// row tally reported to the user.
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    sink: W,
    rows: u64,
}

impl<W: Write> RowWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, rows: 0 }
    }

    pub fn write_row(&mut self, row: &str) -> io::Result<()> {
        if self.rows > 0 {
            self.sink.write_all(b"\n")?;
        }
        self.sink.write_all(row.as_bytes())?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
