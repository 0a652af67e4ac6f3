//! Error types.
//!
//! Rendering is total and never fails. Errors only come from the places
//! that touch the outside world: the interactive terminal probe and
//! configuration parsing.

use std::io;

use thiserror::Error;

/// Why the pixel-geometry probe could not produce a measurement.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Standard input or output is not a terminal.
    #[error("not a terminal")]
    NotATty,

    /// No complete response arrived before the deadline.
    #[error("terminal did not answer {query} within {timeout_ms} ms")]
    Timeout { query: &'static str, timeout_ms: u64 },

    /// A response arrived but did not have the expected shape.
    #[error("malformed response to {query}: {response:?}")]
    Malformed {
        query: &'static str,
        response: String,
    },

    /// The platform has no way to run the probe.
    #[error("pixel probe is not supported on this platform")]
    Unsupported,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration value that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown color mode {0:?} (expected none, 16, 256, truecolor or 24bit)")]
    UnknownColorMode(String),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("screen size {width}x{height} has no cells")]
    EmptyScreen { width: u16, height: u16 },
}
