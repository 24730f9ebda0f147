use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Visual themes for generated QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QrTheme {
    #[default]
    Classic,
    Colorful,
    Neon,
    Nature,
}

/// Background painted behind the QR module grid when exporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid([u8; 3]),
    /// Vertical two-stop gradient, top to bottom.
    Gradient([u8; 3], [u8; 3]),
}

impl QrTheme {
    pub const ALL: [QrTheme; 4] = [
        QrTheme::Classic,
        QrTheme::Colorful,
        QrTheme::Neon,
        QrTheme::Nature,
    ];

    /// Stable identifier used in filenames and config.
    pub fn slug(self) -> &'static str {
        match self {
            QrTheme::Classic => "classic",
            QrTheme::Colorful => "colorful",
            QrTheme::Neon => "neon",
            QrTheme::Nature => "nature",
        }
    }

    /// Translation key for the picker label.
    pub fn label_key(self) -> &'static str {
        match self {
            QrTheme::Classic => "theme.classic",
            QrTheme::Colorful => "theme.colorful",
            QrTheme::Neon => "theme.neon",
            QrTheme::Nature => "theme.nature",
        }
    }

    /// Hex color for the QR modules, as the generation API expects it.
    pub fn module_color(self) -> &'static str {
        match self {
            QrTheme::Classic | QrTheme::Colorful => "000000",
            QrTheme::Neon => "00ffff",
            QrTheme::Nature => "2d5016",
        }
    }

    /// Hex background color for the generation API.
    pub fn background_color(self) -> &'static str {
        match self {
            QrTheme::Classic | QrTheme::Colorful => "ffffff",
            QrTheme::Neon => "000000",
            QrTheme::Nature => "f0f8e8",
        }
    }

    /// Background painted behind the exported image.
    pub fn export_background(self) -> Background {
        match self {
            QrTheme::Classic => Background::Solid([0xff, 0xff, 0xff]),
            QrTheme::Colorful => Background::Gradient([0xff, 0x6b, 0x6b], [0x96, 0xce, 0xb4]),
            QrTheme::Neon => Background::Solid([0x0a, 0x0a, 0x0a]),
            QrTheme::Nature => Background::Gradient([0x66, 0x7e, 0xea], [0x76, 0x4b, 0xa2]),
        }
    }

    /// Next theme in picker order, wrapping around.
    pub fn next(self) -> QrTheme {
        match self {
            QrTheme::Classic => QrTheme::Colorful,
            QrTheme::Colorful => QrTheme::Neon,
            QrTheme::Neon => QrTheme::Nature,
            QrTheme::Nature => QrTheme::Classic,
        }
    }

    /// Previous theme in picker order, wrapping around.
    pub fn prev(self) -> QrTheme {
        match self {
            QrTheme::Classic => QrTheme::Nature,
            QrTheme::Colorful => QrTheme::Classic,
            QrTheme::Neon => QrTheme::Colorful,
            QrTheme::Nature => QrTheme::Neon,
        }
    }
}

/// Terminal color palette; the accent follows the selected QR theme.
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selected: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::for_qr_theme(QrTheme::Classic)
    }
}

impl UiTheme {
    /// Build the palette for a QR theme selection.
    pub fn for_qr_theme(theme: QrTheme) -> Self {
        let accent = match theme {
            QrTheme::Classic => Color::Rgb(99, 102, 241),
            QrTheme::Colorful => Color::Rgb(236, 72, 153),
            QrTheme::Neon => Color::Rgb(34, 211, 238),
            QrTheme::Nature => Color::Rgb(34, 197, 94),
        };

        Self {
            accent,
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),
            text_primary: Color::Rgb(243, 244, 246),
            text_secondary: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            border_focused: accent,
            selected: accent,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn secondary_text_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger_style(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_colors_per_theme() {
        assert_eq!(QrTheme::Classic.module_color(), "000000");
        assert_eq!(QrTheme::Classic.background_color(), "ffffff");
        assert_eq!(QrTheme::Colorful.module_color(), "000000");
        assert_eq!(QrTheme::Colorful.background_color(), "ffffff");
        assert_eq!(QrTheme::Neon.module_color(), "00ffff");
        assert_eq!(QrTheme::Neon.background_color(), "000000");
        assert_eq!(QrTheme::Nature.module_color(), "2d5016");
        assert_eq!(QrTheme::Nature.background_color(), "f0f8e8");
    }

    #[test]
    fn test_export_backgrounds() {
        assert_eq!(
            QrTheme::Classic.export_background(),
            Background::Solid([0xff, 0xff, 0xff])
        );
        assert_eq!(
            QrTheme::Neon.export_background(),
            Background::Solid([0x0a, 0x0a, 0x0a])
        );
        assert!(matches!(
            QrTheme::Colorful.export_background(),
            Background::Gradient(..)
        ));
        assert!(matches!(
            QrTheme::Nature.export_background(),
            Background::Gradient(..)
        ));
    }

    #[test]
    fn test_theme_cycle_round_trip() {
        for theme in QrTheme::ALL {
            assert_eq!(theme.next().prev(), theme);
        }

        let mut theme = QrTheme::Classic;
        for _ in 0..QrTheme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, QrTheme::Classic);
    }

    #[test]
    fn test_theme_serialization() {
        for theme in QrTheme::ALL {
            let serialized = serde_json::to_string(&theme).unwrap();
            assert_eq!(serialized, format!("\"{}\"", theme.slug()));
            let deserialized: QrTheme = serde_json::from_str(&serialized).unwrap();
            assert_eq!(theme, deserialized);
        }
    }

    #[test]
    fn test_ui_accent_follows_qr_theme() {
        let neon = UiTheme::for_qr_theme(QrTheme::Neon);
        let nature = UiTheme::for_qr_theme(QrTheme::Nature);
        assert_ne!(neon.accent, nature.accent);
        assert_eq!(neon.border_focused, neon.accent);
    }
}
