//! Balance label.

use crate::message::Message;
use crate::styles;
use fynancial_core::BalanceDisplay;
use iced::widget::text;
use iced::{alignment, Element, Length};

pub fn render(display: &BalanceDisplay) -> Element<'_, Message> {
    text(&display.text)
        .size(styles::BALANCE_TEXT_SIZE)
        .font(styles::BALANCE_FONT)
        .style(iced::theme::Text::Color(styles::tone_color(display.tone)))
        .width(Length::Fill)
        .horizontal_alignment(alignment::Horizontal::Center)
        .into()
}
