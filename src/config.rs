//! Screen configuration.
//!
//! [`ScreenConfig`] gathers what a caller decides up front: the grid size,
//! an optional forced color tier and the theme. Anything left unset is
//! filled in from the environment when the screen is built.

use crate::error::ConfigError;
use crate::terminal::ColorMode;
use crate::theme::{DesignTokens, ThemeName};

/// How to build a [`Screen`](crate::renderer::Screen).
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
    /// Forced color tier; `None` means detect from the terminal.
    pub color_mode: Option<ColorMode>,
    pub theme: ThemeName,
    /// Custom tokens that replace the theme preset.
    pub tokens: Option<DesignTokens>,
}

impl ScreenConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            color_mode: None,
            theme: ThemeName::default(),
            tokens: None,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = Some(color_mode);
        self
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_tokens(mut self, tokens: DesignTokens) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Custom tokens if set, else the theme preset.
    pub fn effective_tokens(&self) -> DesignTokens {
        self.tokens
            .clone()
            .unwrap_or_else(|| DesignTokens::for_theme(self.theme))
    }

    /// Reject a grid with no cells.
    ///
    /// A zero-sized screen is still usable (every write is dropped), so this
    /// is only for callers that want to treat it as a mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
