//! Built-in token sets.

use super::DesignTokens;
use crate::types::Color;

/// Neutral dark theme.
pub fn default_tokens() -> DesignTokens {
    DesignTokens {
        name: "default",
        foreground: Color::from_rgb_int(0xe5e5e5),
        background: Color::from_rgb_int(0x1e1e1e),
        accent: Color::from_rgb_int(0x61afef),
        muted: Color::from_rgb_int(0x7f848e),
        border: Color::from_rgb_int(0x5c6370),
        success: Color::from_rgb_int(0x98c379),
        warning: Color::from_rgb_int(0xe5c07b),
        error: Color::from_rgb_int(0xe06c75),
    }
}

/// Deep blue night theme.
pub fn midnight() -> DesignTokens {
    DesignTokens {
        name: "midnight",
        foreground: Color::from_rgb_int(0xc8d3f5),
        background: Color::from_rgb_int(0x0b1021),
        accent: Color::from_rgb_int(0x82aaff),
        muted: Color::from_rgb_int(0x636da6),
        border: Color::from_rgb_int(0x2f334d),
        success: Color::from_rgb_int(0xc3e88d),
        warning: Color::from_rgb_int(0xffc777),
        error: Color::from_rgb_int(0xff757f),
    }
}

/// Nord arctic palette.
pub fn nord() -> DesignTokens {
    DesignTokens {
        name: "nord",
        foreground: Color::from_rgb_int(0xd8dee9),
        background: Color::from_rgb_int(0x2e3440),
        accent: Color::from_rgb_int(0x88c0d0),
        muted: Color::from_rgb_int(0x4c566a),
        border: Color::from_rgb_int(0x4c566a),
        success: Color::from_rgb_int(0xa3be8c),
        warning: Color::from_rgb_int(0xebcb8b),
        error: Color::from_rgb_int(0xbf616a),
    }
}

/// Light theme, dark ink on off-white.
pub fn paper() -> DesignTokens {
    DesignTokens {
        name: "paper",
        foreground: Color::from_rgb_int(0x2b2b2b),
        background: Color::from_rgb_int(0xf7f3e9),
        accent: Color::from_rgb_int(0x1d5fa8),
        muted: Color::from_rgb_int(0x8a8576),
        border: Color::from_rgb_int(0xc8c2b0),
        success: Color::from_rgb_int(0x2e7d32),
        warning: Color::from_rgb_int(0xb26a00),
        error: Color::from_rgb_int(0xc62828),
    }
}

/// Saturated year-in-review colors.
pub fn wrapped() -> DesignTokens {
    DesignTokens {
        name: "wrapped",
        foreground: Color::from_rgb_int(0xffffff),
        background: Color::from_rgb_int(0x191414),
        accent: Color::from_rgb_int(0x1db954),
        muted: Color::from_rgb_int(0xb3b3b3),
        border: Color::from_rgb_int(0xff4632),
        success: Color::from_rgb_int(0x1ed760),
        warning: Color::from_rgb_int(0xffc864),
        error: Color::from_rgb_int(0xe91429),
    }
}
