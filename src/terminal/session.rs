//! Full-screen terminal session.
//!
//! Entering a session switches to the alternate screen and hides the cursor.
//! Each [`TerminalSession::present`] writes a whole frame inside a
//! synchronized-update block, buffered into one write. Dropping the session
//! puts the terminal back.

use std::io::{self, Write};

use crate::renderer::{OutputBuffer, Screen, ansi};

/// Current terminal size in cells, as `(columns, rows)`.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    crossterm::terminal::size()
}

/// An active alternate-screen session on stdout.
#[derive(Debug)]
pub struct TerminalSession {
    output: OutputBuffer,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut output = OutputBuffer::new();
        ansi::enter_alt_screen(&mut output)?;
        ansi::cursor_hide(&mut output)?;
        ansi::clear_screen(&mut output)?;
        output.flush_stdout()?;

        tracing::debug!("entered alternate screen");
        Ok(Self { output, active: true })
    }

    /// Write one frame to the terminal.
    pub fn present(&mut self, screen: &Screen) -> io::Result<()> {
        self.output.clear();
        ansi::begin_sync(&mut self.output)?;
        screen.write_to(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()
    }

    /// Leave the alternate screen and show the cursor again.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.output.clear();
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        io::stdout().flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}
