#![forbid(unsafe_code)]

//! Colors and text styles for highlighted tokens.

use std::fmt;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into a `u32` key (`0xRRGGBB`).
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Formats as a CSS hex color, e.g. `#1e1e1e`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual style of one token.
///
/// An unset `fg` inherits the plain foreground of the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
            italic: false,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Render in bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Render in italics.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Whether the style sets nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.italic
    }

    /// Inline CSS declarations for this style (empty when unset).
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(fg) = self.fg {
            css.push_str(&format!("color:{fg};"));
        }
        if self.bold {
            css.push_str("font-weight:bold;");
        }
        if self.italic {
            css.push_str("font-style:italic;");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_splits_channels() {
        assert_eq!(Rgb::hex(0x1E1E1E), Rgb::new(30, 30, 30));
        assert_eq!(Rgb::hex(0xF78C6C).as_key(), 0xF78C6C);
    }

    #[test]
    fn rgb_displays_as_css_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn style_css() {
        assert_eq!(Style::new().to_css(), "");
        assert!(Style::new().is_empty());
        let style = Style::new().fg(Rgb::hex(0x637777)).italic();
        assert_eq!(style.to_css(), "color:#637777;font-style:italic;");
        assert_eq!(Style::new().bold().to_css(), "font-weight:bold;");
    }
}
