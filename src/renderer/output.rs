//! Frame buffering and style-run tracking for serialization.

use std::io::{self, Write};
use std::sync::Arc;

use crate::style::Style;

use super::ansi::{self, AnsiRenderer};

// =============================================================================
// OutputBuffer
// =============================================================================

/// Byte sink for one whole frame.
///
/// The serializer and the session write escapes and cell text here, then
/// hand the frame to the terminal with a single `write_all`.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Room for a full 80x24 frame with a style change on most cells.
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Drop the pending frame, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write the pending frame to stdout and flush it.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.flush_to(&mut stdout)?;
        stdout.flush()
    }

    /// Write the pending frame to `writer` and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if !self.data.is_empty() {
            writer.write_all(&self.data)?;
            self.data.clear();
        }
        Ok(())
    }

    /// The frame as text. Cell content is always UTF-8; anything else is
    /// replaced rather than rejected.
    pub fn into_string(self) -> String {
        String::from_utf8(self.data)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    // Bytes stay pending until `flush_to` or `flush_stdout`.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// StyleRunWriter
// =============================================================================

/// Writes cells in order, emitting `RESET` + SGR only at style-run boundaries.
///
/// Two styles belong to the same run when they are the same allocation or
/// compare equal field by field; pointer equality is checked first since
/// painters reuse one `Arc` for a whole rectangle.
#[derive(Debug)]
pub struct StyleRunWriter {
    renderer: AnsiRenderer,
    last_style: Option<Arc<Style>>,
}

impl StyleRunWriter {
    pub fn new(renderer: AnsiRenderer) -> Self {
        Self {
            renderer,
            last_style: None,
        }
    }

    /// Write one cell's content, preceded by a transition if its style
    /// differs from the previous cell's.
    pub fn write_cell<W: Write>(
        &mut self,
        w: &mut W,
        style: Option<&Arc<Style>>,
        content: &str,
    ) -> io::Result<()> {
        if !same_style(self.last_style.as_ref(), style) {
            ansi::reset(w)?;
            if let Some(style) = style {
                self.renderer.write_style(w, style)?;
            }
            self.last_style = style.cloned();
        }
        w.write_all(content.as_bytes())
    }

    /// Close the stream with a final reset.
    pub fn finish<W: Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.last_style = None;
        ansi::reset(w)
    }
}

fn same_style(a: Option<&Arc<Style>>, b: Option<&Arc<Style>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || **a == **b,
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
