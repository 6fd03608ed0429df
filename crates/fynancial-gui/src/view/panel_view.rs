//! Withdraw and deposit panels.

use crate::message::Message;
use fynancial_core::Operation;
use iced::widget::{button, column, text, text_input};
use iced::{alignment, Element, Length};

/// Entry stacked above its button. Enter in the entry submits too.
pub fn render(operation: Operation, value: &str) -> Element<'_, Message> {
    let entry = text_input(operation.placeholder(), value)
        .on_input(move |text| Message::EntryChanged(operation, text))
        .on_submit(Message::Submit(operation))
        .padding(6);

    let submit = button(
        text(operation.label())
            .width(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center),
    )
    .on_press(Message::Submit(operation))
    .width(Length::Fill);

    column![entry, submit].spacing(6).into()
}
