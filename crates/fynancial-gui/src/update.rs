//! Message handling for the Fynancial GUI application.

use crate::app::FynancialApp;
use crate::helpers;
use crate::message::Message;

use iced::Command;
use log::info;

/// Handle an incoming message and return any resulting command.
pub fn handle_message(app: &mut FynancialApp, message: Message) -> Command<Message> {
    // The error dialog is modal: panel input waits until it is dismissed.
    if app.error_dialog_open && !matches!(message, Message::ErrorDismissed) {
        return Command::none();
    }

    match message {
        Message::EntryChanged(operation, text) => {
            *app.entry_mut(operation) = text;
        }

        Message::Submit(operation) => {
            let input = app.entry(operation).to_string();
            match app.ledger.submit(operation, &input) {
                Ok(submission) => {
                    info!(
                        "{} of {:.2} accepted, balance now {:.2}",
                        submission.operation, submission.amount, submission.balance
                    );
                    app.display = submission.display;
                    app.entry_mut(operation).clear();
                }
                Err(e) => {
                    app.error_dialog_open = true;
                    return helpers::error_dialog(&app.config.title, e.to_string());
                }
            }
        }

        Message::ErrorDismissed => {
            app.error_dialog_open = false;
        }
    }

    Command::none()
}
