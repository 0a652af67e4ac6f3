//! Pixel geometry of the terminal window.
//!
//! Terminals that support xterm window ops answer two in-band queries:
//!
//! ```text
//! CSI 14 t  →  CSI 4 ; height ; width t     (text area in pixels)
//! CSI 18 t  →  CSI 8 ; rows ; columns t     (text area in cells)
//! ```
//!
//! The probe is best-effort. Each answer must arrive within 100 ms; any
//! failure yields an estimate of 9×18 pixel cells and
//! `has_pixel_support = false`. Nothing in the render path depends on the
//! result.

use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use crate::error::ProbeError;

use super::raw::RawModeGuard;

/// Per-query response deadline.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(100);

/// Longest response accepted before giving up on the terminator.
pub const MAX_RESPONSE_LEN: usize = 32;

/// Cell size assumed when the terminal cannot tell us.
pub const ESTIMATED_CELL_WIDTH: f64 = 9.0;
pub const ESTIMATED_CELL_HEIGHT: f64 = 18.0;

const PIXEL_SIZE_QUERY: &str = "\x1b[14t";
const CHAR_SIZE_QUERY: &str = "\x1b[18t";

// =============================================================================
// Transport
// =============================================================================

/// A channel to the terminal: send a query, read reply bytes with a timeout.
pub trait QueryTransport {
    fn send(&mut self, query: &[u8]) -> io::Result<()>;

    /// Read one byte, or `None` if nothing arrives within `timeout`.
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// The controlling terminal: queries go to stdout, replies come from stdin
/// in raw mode. Raw mode ends when the transport is dropped.
#[derive(Debug)]
pub struct TtyTransport {
    _raw: RawModeGuard,
}

impl TtyTransport {
    /// Require both ends to be a terminal, then enter raw mode.
    #[cfg(unix)]
    pub fn open() -> Result<Self, ProbeError> {
        use crossterm::tty::IsTty;

        if !io::stdin().is_tty() || !io::stdout().is_tty() {
            return Err(ProbeError::NotATty);
        }
        Ok(Self {
            _raw: RawModeGuard::enable()?,
        })
    }

    #[cfg(not(unix))]
    pub fn open() -> Result<Self, ProbeError> {
        Err(ProbeError::Unsupported)
    }
}

#[cfg(unix)]
impl QueryTransport for TtyTransport {
    fn send(&mut self, query: &[u8]) -> io::Result<()> {
        use std::io::Write;

        let mut stdout = io::stdout().lock();
        stdout.write_all(query)?;
        stdout.flush()
    }

    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        let mut pfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout_ms = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;

        let ready = unsafe { libc::poll(&mut pfd, 1, timeout_ms) };
        if ready < 0 {
            return Err(io::Error::last_os_error());
        }
        if ready == 0 {
            return Ok(None);
        }

        let mut byte = 0u8;
        let n = unsafe { libc::read(fd, (&mut byte as *mut u8).cast(), 1) };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => Err(io::Error::last_os_error()),
        }
    }
}

#[cfg(not(unix))]
impl QueryTransport for TtyTransport {
    fn send(&mut self, _query: &[u8]) -> io::Result<()> {
        Err(io::ErrorKind::Unsupported.into())
    }

    fn read_byte(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Err(io::ErrorKind::Unsupported.into())
    }
}

// =============================================================================
// Probe
// =============================================================================

/// Raw answers to both queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGeometry {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub columns: u16,
    pub rows: u16,
}

impl PixelGeometry {
    pub fn cell_width(&self) -> f64 {
        self.pixel_width as f64 / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.pixel_height as f64 / self.rows as f64
    }
}

/// Ask the terminal for its text area in pixels and in cells.
pub fn probe_pixel_geometry<T: QueryTransport + ?Sized>(
    transport: &mut T,
) -> Result<PixelGeometry, ProbeError> {
    let response = query(transport, PIXEL_SIZE_QUERY)?;
    let (pixel_width, pixel_height) =
        parse_pixel_size_response(&response).ok_or_else(|| ProbeError::Malformed {
            query: "CSI 14 t",
            response: response.clone(),
        })?;

    let response = query(transport, CHAR_SIZE_QUERY)?;
    let (columns, rows) =
        parse_char_size_response(&response).ok_or_else(|| ProbeError::Malformed {
            query: "CSI 18 t",
            response: response.clone(),
        })?;

    Ok(PixelGeometry {
        pixel_width,
        pixel_height,
        columns,
        rows,
    })
}

/// Send one query and collect the reply up to `t`, 32 bytes or the deadline.
fn query<T: QueryTransport + ?Sized>(
    transport: &mut T,
    q: &'static str,
) -> Result<String, ProbeError> {
    transport.send(q.as_bytes())?;

    let deadline = Instant::now() + PROBE_TIMEOUT;
    let mut response = Vec::with_capacity(MAX_RESPONSE_LEN);

    while response.len() < MAX_RESPONSE_LEN {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timeout(q));
        }
        match transport.read_byte(remaining)? {
            Some(b't') => {
                response.push(b't');
                break;
            }
            Some(byte) => response.push(byte),
            None => return Err(timeout(q)),
        }
    }

    Ok(String::from_utf8_lossy(&response).into_owned())
}

fn timeout(q: &str) -> ProbeError {
    ProbeError::Timeout {
        query: if q == PIXEL_SIZE_QUERY { "CSI 14 t" } else { "CSI 18 t" },
        timeout_ms: PROBE_TIMEOUT.as_millis() as u64,
    }
}

/// Split `CSI tag ; a ; b t` into `(a, b)` when the tag matches.
fn parse_report(response: &str, tag: &str) -> Option<(u32, u32)> {
    let body = response.strip_prefix("\x1b[").unwrap_or(response);
    let body = body.strip_suffix('t').unwrap_or(body);

    let mut parts = body.split(';');
    if parts.next()? != tag {
        return None;
    }
    let a = parts.next()?.trim().parse().ok()?;
    let b = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

/// Parse `CSI 4 ; height ; width t` into `(width, height)` in pixels.
pub fn parse_pixel_size_response(response: &str) -> Option<(u32, u32)> {
    let (height, width) = parse_report(response, "4")?;
    Some((width, height))
}

/// Parse `CSI 8 ; rows ; columns t` into `(columns, rows)`.
///
/// A zero in either position is rejected since it cannot size a cell.
pub fn parse_char_size_response(response: &str) -> Option<(u16, u16)> {
    let (rows, columns) = parse_report(response, "8")?;
    let rows = u16::try_from(rows).ok().filter(|&r| r > 0)?;
    let columns = u16::try_from(columns).ok().filter(|&c| c > 0)?;
    Some((columns, rows))
}

// =============================================================================
// TerminalDimensions
// =============================================================================

/// Terminal size in cells and pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalDimensions {
    pub columns: u16,
    pub rows: u16,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub has_pixel_support: bool,
}

impl TerminalDimensions {
    /// Probe the controlling terminal, falling back to an estimate.
    pub fn query(columns: u16, rows: u16) -> Self {
        let probed = TtyTransport::open().and_then(|mut tty| probe_pixel_geometry(&mut tty));
        Self::from_probe(columns, rows, probed)
    }

    /// Combine a known cell grid with a probe outcome.
    pub fn from_probe(columns: u16, rows: u16, probed: Result<PixelGeometry, ProbeError>) -> Self {
        match probed {
            Ok(geometry) => Self {
                columns,
                rows,
                pixel_width: geometry.pixel_width,
                pixel_height: geometry.pixel_height,
                cell_width: geometry.cell_width(),
                cell_height: geometry.cell_height(),
                has_pixel_support: true,
            },
            Err(err) => {
                tracing::debug!(error = %err, "pixel probe failed, using estimated cell size");
                Self::estimated(columns, rows)
            }
        }
    }

    /// 9×18 pixel cells.
    pub fn estimated(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            pixel_width: (ESTIMATED_CELL_WIDTH * columns as f64) as u32,
            pixel_height: (ESTIMATED_CELL_HEIGHT * rows as f64) as u32,
            cell_width: ESTIMATED_CELL_WIDTH,
            cell_height: ESTIMATED_CELL_HEIGHT,
            has_pixel_support: false,
        }
    }
}

impl fmt::Display for TerminalDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_pixel_support {
            write!(
                f,
                "{}x{} chars ({}x{} pixels, {:.1}x{:.1} per cell)",
                self.columns,
                self.rows,
                self.pixel_width,
                self.pixel_height,
                self.cell_width,
                self.cell_height
            )
        } else {
            write!(
                f,
                "{}x{} chars ({:.1}x{:.1} per cell, estimated)",
                self.columns, self.rows, self.cell_width, self.cell_height
            )
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
