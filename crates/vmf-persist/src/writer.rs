use std::fmt::Display;
use std::io::Write;

use crate::error::PersistError;
use crate::format::INDENT;

/// Streams nested `name { "key" "value" }` blocks to a sink.
///
/// The writer tracks nesting depth and bytes written. It never flushes or
/// closes the sink.
pub struct BlockWriter<'a, W: Write> {
    sink: &'a mut W,
    depth: usize,
    bytes_written: usize,
    line_buf: String,
}

impl<'a, W: Write> BlockWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            sink,
            depth: 0,
            bytes_written: 0,
            line_buf: String::with_capacity(128),
        }
    }

    /// Write `name` and `{` on their own lines, then indent one level.
    pub fn open(&mut self, name: &str) -> Result<(), PersistError> {
        self.line(format_args!("{name}"))?;
        self.line(format_args!("{{"))?;
        self.depth += 1;
        Ok(())
    }

    /// Outdent one level and write `}`.
    pub fn close(&mut self) -> Result<(), PersistError> {
        debug_assert!(self.depth > 0, "close() without matching open()");
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("}}"))
    }

    /// Write `"key" "value"`. The value is quoted but not escaped.
    pub fn field(&mut self, key: &str, value: impl Display) -> Result<(), PersistError> {
        self.line(format_args!("\"{key}\" \"{value}\""))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    fn line(&mut self, content: std::fmt::Arguments<'_>) -> Result<(), PersistError> {
        self.line_buf.clear();
        self.line_buf.extend(std::iter::repeat(INDENT).take(self.depth));
        std::fmt::Write::write_fmt(&mut self.line_buf, content)
            .map_err(|_| std::io::Error::other("value formatting failed"))?;
        self.line_buf.push('\n');
        self.sink.write_all(self.line_buf.as_bytes())?;
        self.bytes_written += self.line_buf.len();
        Ok(())
    }
}
