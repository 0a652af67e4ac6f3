//! Design tokens for themed screens.
//!
//! A theme is a small set of semantic colors. Widgets pick a slot
//! (`foreground`, `accent`, `border`, ...) rather than a literal color, so a
//! whole screen can be re-themed by swapping the token set.
//!
//! # Example
//!
//! ```rust
//! use spark_screen::style::BorderSet;
//! use spark_screen::theme::{DesignTokens, ThemeName};
//!
//! let nord = DesignTokens::for_theme(ThemeName::Nord);
//! let panel = nord.panel_style(BorderSet::ROUNDED);
//! assert_eq!(panel.border_color, Some(nord.border));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::style::{BorderSet, Style};
use crate::types::Color;

mod presets;

pub use presets::{default_tokens, midnight, nord, paper, wrapped};

// =============================================================================
// ThemeName
// =============================================================================

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Midnight,
    Nord,
    Paper,
    Wrapped,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        Self::Default,
        Self::Midnight,
        Self::Nord,
        Self::Paper,
        Self::Wrapped,
    ];

    /// Look up a theme by name, case-insensitively. Unknown names get
    /// [`ThemeName::Default`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "midnight" => Self::Midnight,
            "nord" => Self::Nord,
            "paper" => Self::Paper,
            "wrapped" => Self::Wrapped,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
            Self::Nord => "nord",
            Self::Paper => "paper",
            Self::Wrapped => "wrapped",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

// =============================================================================
// DesignTokens
// =============================================================================

/// Semantic colors of one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    pub name: &'static str,
    /// Body text.
    pub foreground: Color,
    /// Screen and panel fill.
    pub background: Color,
    /// Highlights, titles, selected items.
    pub accent: Color,
    /// Secondary text.
    pub muted: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl DesignTokens {
    /// Preset tokens for a theme.
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Default => default_tokens(),
            ThemeName::Midnight => midnight(),
            ThemeName::Nord => nord(),
            ThemeName::Paper => paper(),
            ThemeName::Wrapped => wrapped(),
        }
    }

    /// Body text on the theme background.
    pub fn text_style(&self) -> Style {
        Style::new()
            .with_foreground(self.foreground)
            .with_background(self.background)
    }

    /// A filled panel with a border in the theme's border color.
    pub fn panel_style(&self, chars: BorderSet) -> Style {
        self.text_style()
            .with_border(chars)
            .with_border_color(self.border)
    }

    /// Bold accent text on the theme background.
    pub fn accent_style(&self) -> Style {
        Style::new()
            .with_foreground(self.accent)
            .with_background(self.background)
            .with_bold(true)
    }

    pub fn muted_style(&self) -> Style {
        Style::new()
            .with_foreground(self.muted)
            .with_background(self.background)
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        default_tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attr;

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeName::from_name("nord"), ThemeName::Nord);
        assert_eq!(ThemeName::from_name(" Midnight "), ThemeName::Midnight);
        assert_eq!(ThemeName::from_name("solarized"), ThemeName::Default);
        assert_eq!("PAPER".parse::<ThemeName>(), Ok(ThemeName::Paper));
    }

    #[test]
    fn test_names_round_trip() {
        for theme in ThemeName::ALL {
            assert_eq!(ThemeName::from_name(&theme.to_string()), theme);
            assert_eq!(DesignTokens::for_theme(theme).name, theme.as_str());
        }
    }

    #[test]
    fn test_presets_are_distinct() {
        let backgrounds: Vec<_> = ThemeName::ALL
            .iter()
            .map(|&t| DesignTokens::for_theme(t).background)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_style_helpers() {
        let tokens = DesignTokens::for_theme(ThemeName::Wrapped);

        let panel = tokens.panel_style(BorderSet::DOUBLE);
        assert_eq!(panel.background, Some(tokens.background));
        assert_eq!(panel.border.map(|b| b.chars), Some(BorderSet::DOUBLE));
        assert_eq!(panel.border_color, Some(tokens.border));

        let accent = tokens.accent_style();
        assert_eq!(accent.foreground, Some(tokens.accent));
        assert!(accent.attrs.contains(Attr::BOLD));
    }
}
