//! Raw mode for the duration of a scope.
//!
//! [`RawModeGuard`] switches stdin to raw mode and puts the saved settings
//! back when dropped, on every exit path. Restore failures cannot be
//! propagated from `Drop`, so they are logged.

use std::io;

/// Saved terminal settings, restored on drop.
pub struct RawModeGuard {
    #[cfg(unix)]
    fd: libc::c_int,
    #[cfg(unix)]
    original: libc::termios,
}

#[cfg(unix)]
impl RawModeGuard {
    /// Put stdin into raw mode (no echo, no line buffering, no signals).
    pub fn enable() -> io::Result<Self> {
        use std::os::unix::io::AsRawFd;
        let fd = io::stdin().as_raw_fd();

        // SAFETY: `termios` is plain data; tcgetattr fills it or fails.
        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut original) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut raw = original;
        raw.c_iflag &= !(libc::IGNBRK
            | libc::BRKINT
            | libc::PARMRK
            | libc::ISTRIP
            | libc::INLCR
            | libc::IGNCR
            | libc::ICRNL
            | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_cflag &= !(libc::CSIZE | libc::PARENB);
        raw.c_cflag |= libc::CS8;
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;

        if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Self { fd, original })
    }

    fn restore(&self) -> io::Result<()> {
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &self.original) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(not(unix))]
impl RawModeGuard {
    /// Put the console into raw mode.
    pub fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self {})
    }

    fn restore(&self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

impl std::fmt::Debug for RawModeGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard").finish_non_exhaustive()
    }
}
