//! Custom styles for the Fynancial GUI application.

use fynancial_core::Tone;
use iced::Color;

/// Balance label color for a tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::from_rgba8(0, 255, 0, 100.0 / 255.0),
        Tone::Negative => Color::from_rgba8(255, 0, 0, 100.0 / 255.0),
        Tone::Neutral => Color::from_rgba8(0, 255, 255, 100.0 / 255.0),
    }
}

/// Balance label font size.
pub const BALANCE_TEXT_SIZE: f32 = 32.0;

/// Bold variant of the default font.
pub const BALANCE_FONT: iced::Font = iced::Font {
    weight: iced::font::Weight::Bold,
    ..iced::Font::DEFAULT
};
