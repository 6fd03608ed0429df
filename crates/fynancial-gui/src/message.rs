//! Message types for the Fynancial GUI application.

use fynancial_core::Operation;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Panel input
    EntryChanged(Operation, String),
    Submit(Operation),

    // Error dialog closed by the user
    ErrorDismissed,
}
