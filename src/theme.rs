//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: white page, blue-rimmed coins with a white front and a yellow back

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLUE: Color = Color::Rgb(0x44, 0x7A, 0xF7);
    pub const YELLOW: Color = Color::Rgb(0xEE, 0xCC, 0x2D);

    pub const TEXT: Color = Color::Rgb(40, 44, 60);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 124, 140);
    pub const BG_SURFACE: Color = Color::Rgb(238, 240, 246);
}

/// Grid page background
pub mod page {
    use super::*;

    pub const BACKGROUND: Color = palette::WHITE;
}

/// Coin faces and rim
pub mod coin {
    use super::*;

    /// Stroke around both faces and the edge seen mid-flip
    pub const RIM: Color = palette::BLUE;
    pub const FRONT: Color = palette::WHITE;
    pub const BACK: Color = palette::YELLOW;
}

/// Bottom status line
pub mod status_line {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT;
    pub const KEY: Color = palette::BLUE;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_MUTED;
    pub const WARNING: Color = Color::Rgb(196, 120, 0);
}
