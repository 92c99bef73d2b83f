use ratatui::style::{Color, Modifier, Style};

/// Paddy-field theme.
///
/// Base aesthetic:
/// - young-rice green foreground
/// - dark soil background
/// - ripe-grain gold for highlighted values
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(18, 16, 12);
    pub const FG: Color = Color::Rgb(150, 220, 110);
    pub const FG_DIM: Color = Color::Rgb(95, 150, 70);
    pub const FG_MUTED: Color = Color::Rgb(90, 90, 80);

    // Accents
    pub const ACCENT_GOLD: Color = Color::Rgb(240, 200, 80);
    pub const ACCENT_SKY: Color = Color::Rgb(120, 190, 240);
    pub const ACCENT_RED: Color = Color::Rgb(255, 90, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the focused panel.
    pub fn border_focus() -> Style {
        Style::default().fg(Self::ACCENT_GOLD).bg(Self::BG)
    }

    /// Titles (bold green).
    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Headline numbers.
    pub fn figure() -> Style {
        Style::default()
            .fg(Self::ACCENT_GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled part of a slider gauge.
    pub fn gauge() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Filled part of the selected slider gauge.
    pub fn gauge_focus() -> Style {
        Style::default().fg(Self::ACCENT_GOLD).bg(Self::BG)
    }

    /// The predicted-yield curve.
    pub fn curve() -> Style {
        Style::default().fg(Self::FG)
    }

    /// The reference acidity marker on the chart.
    pub fn marker() -> Style {
        Style::default()
            .fg(Self::ACCENT_SKY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_GOLD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_sky() -> Style {
        Style::default()
            .fg(Self::ACCENT_SKY)
            .add_modifier(Modifier::BOLD)
    }
}
