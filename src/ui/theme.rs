//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg0: Color,
    /// Raised background (status bar, active tab).
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Highlight text color.
    pub yellow: Color,
    /// Help text color.
    pub green: Color,
    /// Damage / hydroxyapatite color.
    pub red: Color,
    /// Caution color.
    pub orange: Color,
    /// Protection / fluorapatite color.
    pub blue: Color,
    /// Reference marker color.
    pub gray: Color,
    /// Dentin fill.
    pub dentin: Color,
    /// Healthy enamel fill.
    pub enamel: Color,
    /// Eroded enamel fill.
    pub enamel_eroded: Color,
    /// Coating fill.
    pub coating: Color,
    /// Enamel outline.
    pub outline: Color,
    /// Acid particle color at full opacity.
    pub acid: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                red: Color::Rgb(251, 73, 52),
                orange: Color::Rgb(254, 128, 25),
                blue: Color::Rgb(131, 165, 152),
                gray: Color::Rgb(146, 131, 116),
                dentin: Color::Rgb(255, 228, 181),
                enamel: Color::Rgb(245, 245, 245),
                enamel_eroded: Color::Rgb(200, 200, 200),
                coating: Color::Rgb(135, 206, 235),
                outline: Color::Rgb(128, 128, 128),
                acid: Color::Rgb(255, 0, 0),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 245, 234),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(60, 56, 54),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                red: Color::Rgb(157, 0, 6),
                orange: Color::Rgb(175, 58, 3),
                blue: Color::Rgb(7, 102, 120),
                gray: Color::Rgb(124, 111, 100),
                dentin: Color::Rgb(215, 170, 90),
                enamel: Color::Rgb(150, 150, 150),
                enamel_eroded: Color::Rgb(110, 110, 110),
                coating: Color::Rgb(40, 140, 200),
                outline: Color::Rgb(60, 60, 60),
                acid: Color::Rgb(220, 0, 0),
            },
        }
    }
}

/// Mix `fg` over `bg` with opacity `alpha`. Non-RGB colors are returned as is.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (f64::from(f) * a + f64::from(b) * (1.0 - a)).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let fg = Color::Rgb(255, 0, 0);
        let bg = Color::Rgb(0, 0, 255);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(128, 0, 128));
    }

    #[test]
    fn blend_passes_named_colors_through() {
        assert_eq!(blend(Color::Red, Color::Rgb(0, 0, 0), 0.3), Color::Red);
    }
}
