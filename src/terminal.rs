//! Terminal capability detection and styling

use owo_colors::{OwoColorize, colors::css};

use crate::domain::ColorMode;

/// Detects whether colored output should be enabled
#[must_use]
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
#[must_use]
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Shrinks `preferred` to the terminal width when the terminal is narrower
#[must_use]
pub fn fit_width(preferred: usize) -> usize {
    terminal_width().map_or(preferred, |w| preferred.min(usize::from(w)))
}

/// Styles for the different kinds of console messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Resolves a [`ColorMode`] against the current stdout
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Auto => supports_color(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        Self { enabled }
    }

    /// A palette that leaves text untouched
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Whether styles are applied
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Color as success (green)
    #[must_use]
    pub fn success(&self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    #[must_use]
    pub fn warning(&self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as info (blue)
    #[must_use]
    pub fn info(&self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold the text
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.success("ok"), "ok");
        assert_eq!(palette.warning("careful"), "careful");
        assert_eq!(palette.bold("Sotao"), "Sotao");
    }

    #[test]
    fn forced_colour_adds_escape_codes() {
        let palette = Palette::new(ColorMode::Always);
        assert!(palette.is_enabled());
        let styled = palette.info("Pistas");
        assert!(styled.contains("Pistas"));
        assert!(styled.starts_with('\u{1b}'));
    }

    #[test]
    fn never_disables_colour() {
        assert!(!Palette::new(ColorMode::Never).is_enabled());
    }

    #[test]
    fn fit_width_never_grows() {
        assert!(fit_width(60) <= 60);
        assert_eq!(fit_width(0), 0);
    }
}
