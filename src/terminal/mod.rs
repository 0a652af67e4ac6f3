//! Terminal I/O: capability detection, pixel geometry, raw mode and the
//! alternate-screen session.

pub mod capabilities;
pub mod dimensions;
mod raw;
mod session;

pub use capabilities::{Capabilities, ColorMode, TermEnv, detect_color_mode};
pub use dimensions::{
    PixelGeometry, QueryTransport, TerminalDimensions, TtyTransport, parse_char_size_response,
    parse_pixel_size_response, probe_pixel_geometry,
};
pub use raw::RawModeGuard;
pub use session::{TerminalSession, terminal_size};
