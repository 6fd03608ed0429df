//! View rendering for the Fynancial GUI application.

mod balance_view;
mod panel_view;

use crate::app::FynancialApp;
use crate::message::Message;
use fynancial_core::Operation;
use iced::widget::{column, container};
use iced::{Element, Length};

/// Three equal rows: balance, withdraw panel, deposit panel.
pub fn render(app: &FynancialApp) -> Element<'_, Message> {
    let rows = [
        balance_view::render(&app.display),
        panel_view::render(Operation::Withdraw, app.entry(Operation::Withdraw)),
        panel_view::render(Operation::Deposit, app.entry(Operation::Deposit)),
    ]
    .into_iter()
    .map(|cell| {
        container(cell)
            .width(Length::Fill)
            .height(Length::FillPortion(1))
            .center_y()
            .into()
    })
    .collect::<Vec<Element<'_, Message>>>();

    column(rows)
        .spacing(8)
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
