//! Application state and lifecycle for the Fynancial GUI.

use crate::helpers;
use crate::message::Message;
use crate::types::AppConfig;
use crate::update;
use crate::view;

use fynancial_core::{BalanceDisplay, Ledger, Operation};
use iced::{Application, Command, Element, Settings, Theme};

/// Main application state.
pub struct FynancialApp {
    pub config: AppConfig,
    pub ledger: Ledger,
    pub display: BalanceDisplay,
    pub withdraw_input: String,
    pub deposit_input: String,
    pub error_dialog_open: bool,
}

impl Application for FynancialApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (Self, Command<Message>) {
        (Self::with_config(config), Command::none())
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl FynancialApp {
    /// Fresh state: zero balance, empty entries.
    pub fn with_config(config: AppConfig) -> Self {
        let ledger = Ledger::new();
        let display = ledger.display();
        Self {
            config,
            ledger,
            display,
            withdraw_input: String::new(),
            deposit_input: String::new(),
            error_dialog_open: false,
        }
    }

    /// Current text of the entry belonging to `operation`.
    pub fn entry(&self, operation: Operation) -> &str {
        match operation {
            Operation::Withdraw => &self.withdraw_input,
            Operation::Deposit => &self.deposit_input,
        }
    }

    pub fn entry_mut(&mut self, operation: Operation) -> &mut String {
        match operation {
            Operation::Withdraw => &mut self.withdraw_input,
            Operation::Deposit => &mut self.deposit_input,
        }
    }
}

/// Run the application.
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    let icon = helpers::load_window_icon(&config.icon_path)?;

    let settings = Settings {
        window: helpers::window_settings(&config, Some(icon)),
        ..Settings::with_flags(config)
    };

    FynancialApp::run(settings).map_err(|e| anyhow::anyhow!("Event loop failed: {}", e))
}
