//! Theme system for the booking timer
//! Supports both dark and light modes with a consistent color palette

use iced::widget::container;
use iced::{Background, Color, Theme, color};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d0d0d);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf0f0f0);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Amber accent used for the confirm bar and celebration (same for both modes)
pub const ACCENT: Color = color!(0xf5a623);

/// Positive delta color
pub const DELTA_POSITIVE: Color = color!(0x2ecc71);

/// Negative delta color
pub const DELTA_NEGATIVE: Color = color!(0xe74c3c);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card panel holding the timer and the wheel
pub fn timer_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: iced::Border {
            radius: 10.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Apply an opacity to a color, keeping its hue
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
