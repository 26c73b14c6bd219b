//! Color themes.
//!
//! Four palettes matching the calculator's decorative moods. Themes only
//! change colors; layout and behavior are identical across all of them.

use clap::ValueEnum;
use ratatui::style::Color;

/// The available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Deep purple and indigo.
    Dark,
    /// Hot pink over violet.
    Neon,
    /// Blues and teals.
    Ocean,
    /// Oranges fading into pink.
    Sunset,
}

/// The colors a theme assigns to each part of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-screen background.
    pub background: Color,
    /// Panel fill behind the display and keypad.
    pub surface: Color,
    /// Panel borders.
    pub border: Color,
    /// The main display value.
    pub display: Color,
    /// The dimmer pending-expression preview line.
    pub preview: Color,
    /// Digit and decimal-point buttons.
    pub digit: Color,
    /// Operator buttons.
    pub operator: Color,
    /// The equals button.
    pub equals: Color,
    /// The clear button.
    pub clear: Color,
    /// Function buttons (backspace).
    pub function: Color,
    /// Branding and highlights.
    pub accent: Color,
    /// Background particles.
    pub particle: Color,
    /// Key hints and secondary text.
    pub hint: Color,
}

impl Theme {
    /// Every theme, in cycling order.
    pub const ALL: [Self; 4] = [Self::Dark, Self::Neon, Self::Ocean, Self::Sunset];

    /// Returns the next theme in the cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Dark => Self::Neon,
            Self::Neon => Self::Ocean,
            Self::Ocean => Self::Sunset,
            Self::Sunset => Self::Dark,
        }
    }

    /// Returns the theme's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Neon => "Neon",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
        }
    }

    /// Returns the color of the theme's selector dot in the header.
    #[must_use]
    pub const fn swatch(self) -> Color {
        match self {
            Self::Dark => Color::Rgb(76, 29, 149),
            Self::Neon => Color::Rgb(190, 24, 93),
            Self::Ocean => Color::Rgb(8, 145, 178),
            Self::Sunset => Color::Rgb(234, 88, 12),
        }
    }

    /// Returns the full palette for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::Rgb(17, 13, 43),
                surface: Color::Rgb(26, 21, 60),
                border: Color::Rgb(99, 102, 241),
                display: Color::Rgb(237, 233, 254),
                preview: Color::Rgb(148, 143, 184),
                digit: Color::Rgb(226, 232, 240),
                operator: Color::Rgb(251, 146, 60),
                equals: Color::Rgb(52, 211, 153),
                clear: Color::Rgb(248, 113, 113),
                function: Color::Rgb(167, 139, 250),
                accent: Color::Rgb(129, 140, 248),
                particle: Color::Rgb(165, 180, 252),
                hint: Color::Rgb(104, 99, 148),
            },
            Self::Neon => Palette {
                background: Color::Rgb(40, 7, 56),
                surface: Color::Rgb(55, 12, 74),
                border: Color::Rgb(236, 72, 153),
                display: Color::Rgb(252, 231, 243),
                preview: Color::Rgb(199, 146, 199),
                digit: Color::Rgb(250, 232, 255),
                operator: Color::Rgb(232, 121, 249),
                equals: Color::Rgb(45, 212, 191),
                clear: Color::Rgb(251, 113, 133),
                function: Color::Rgb(192, 132, 252),
                accent: Color::Rgb(244, 114, 182),
                particle: Color::Rgb(240, 171, 252),
                hint: Color::Rgb(146, 95, 146),
            },
            Self::Ocean => Palette {
                background: Color::Rgb(8, 29, 52),
                surface: Color::Rgb(12, 42, 70),
                border: Color::Rgb(34, 211, 238),
                display: Color::Rgb(224, 242, 254),
                preview: Color::Rgb(125, 161, 182),
                digit: Color::Rgb(186, 230, 253),
                operator: Color::Rgb(56, 189, 248),
                equals: Color::Rgb(52, 211, 153),
                clear: Color::Rgb(251, 146, 60),
                function: Color::Rgb(45, 212, 191),
                accent: Color::Rgb(103, 232, 249),
                particle: Color::Rgb(165, 243, 252),
                hint: Color::Rgb(92, 129, 151),
            },
            Self::Sunset => Palette {
                background: Color::Rgb(49, 13, 21),
                surface: Color::Rgb(66, 19, 28),
                border: Color::Rgb(251, 146, 60),
                display: Color::Rgb(255, 237, 213),
                preview: Color::Rgb(201, 143, 122),
                digit: Color::Rgb(254, 215, 170),
                operator: Color::Rgb(251, 113, 133),
                equals: Color::Rgb(250, 204, 21),
                clear: Color::Rgb(248, 113, 113),
                function: Color::Rgb(244, 114, 182),
                accent: Color::Rgb(253, 186, 116),
                particle: Color::Rgb(254, 205, 211),
                hint: Color::Rgb(158, 101, 91),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme_and_wraps() {
        let mut theme = Theme::Dark;
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.cycle();
        }
        assert_eq!(seen, Theme::ALL);
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::Dark.name(), "Dark");
        assert_eq!(Theme::Neon.name(), "Neon");
        assert_eq!(Theme::Ocean.name(), "Ocean");
        assert_eq!(Theme::Sunset.name(), "Sunset");
    }

    #[test]
    fn test_palettes_are_distinct() {
        for a in Theme::ALL {
            for b in Theme::ALL {
                if a != b {
                    assert_ne!(a.palette().background, b.palette().background);
                    assert_ne!(a.swatch(), b.swatch());
                }
            }
        }
    }
}
