//! Static terminal capability detection.
//!
//! The color tier comes from the process environment (`TERM`, `COLORTERM`,
//! `TERM_PROGRAM`) and whether stdout is a terminal. Detection runs once and
//! yields an immutable [`Capabilities`] record that the caller hands to a
//! screen.

use std::fmt;
use std::io;
use std::str::FromStr;

use crossterm::tty::IsTty;

use crate::error::ConfigError;

// =============================================================================
// ColorMode
// =============================================================================

/// Color depth the terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ColorMode {
    /// No color codes at all; text attributes still apply.
    #[default]
    None,
    /// The 16 ANSI colors.
    Ansi16,
    /// The xterm 256-color palette.
    Ansi256,
    /// 24-bit direct color.
    TrueColor,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Ansi16 => "16",
            Self::Ansi256 => "256",
            Self::TrueColor => "truecolor",
        })
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Self::None),
            "16" | "ansi16" => Ok(Self::Ansi16),
            "256" | "ansi256" => Ok(Self::Ansi256),
            "truecolor" | "24bit" => Ok(Self::TrueColor),
            _ => Err(ConfigError::UnknownColorMode(s.to_string())),
        }
    }
}

// =============================================================================
// Environment
// =============================================================================

/// The environment variables color detection reads.
///
/// Unset variables are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermEnv {
    pub term: String,
    pub colorterm: String,
    pub term_program: String,
}

impl TermEnv {
    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            term: var("TERM"),
            colorterm: var("COLORTERM"),
            term_program: var("TERM_PROGRAM"),
        }
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_colorterm(mut self, colorterm: impl Into<String>) -> Self {
        self.colorterm = colorterm.into();
        self
    }

    pub fn with_term_program(mut self, term_program: impl Into<String>) -> Self {
        self.term_program = term_program.into();
        self
    }
}

/// Pick the color tier for a terminal, assuming stdout is a TTY.
///
/// Apple Terminal advertises more than it renders, so it is pinned to 16
/// colors before `COLORTERM` is consulted.
pub fn detect_color_mode(env: &TermEnv) -> ColorMode {
    if env.term_program == "Apple_Terminal" {
        return ColorMode::Ansi16;
    }

    if env.colorterm == "truecolor" || env.colorterm == "24bit" {
        return ColorMode::TrueColor;
    }

    let term = env.term.as_str();
    let has = |needle: &str| term.contains(needle);

    if has("truecolor") || has("24bit") {
        return ColorMode::TrueColor;
    }
    if has("iterm") || has("alacritty") || has("kitty") {
        return ColorMode::TrueColor;
    }
    if has("256color") || has("xterm") {
        return ColorMode::Ansi256;
    }
    if !term.is_empty() && term != "dumb" {
        return ColorMode::Ansi16;
    }

    ColorMode::None
}

// =============================================================================
// Capabilities
// =============================================================================

/// What the attached terminal can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub color_mode: ColorMode,
    pub is_tty: bool,
    pub supports_alt_screen: bool,
}

impl Capabilities {
    /// Detect from the process environment and stdout.
    pub fn detect() -> Self {
        let caps = Self::from_env(&TermEnv::from_process(), io::stdout().is_tty());
        tracing::debug!(
            color_mode = %caps.color_mode,
            is_tty = caps.is_tty,
            "detected terminal capabilities"
        );
        caps
    }

    /// Capabilities for a given environment. A non-TTY gets no color.
    pub fn from_env(env: &TermEnv, is_tty: bool) -> Self {
        let color_mode = if is_tty {
            detect_color_mode(env)
        } else {
            ColorMode::None
        };
        Self {
            color_mode,
            is_tty,
            supports_alt_screen: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
