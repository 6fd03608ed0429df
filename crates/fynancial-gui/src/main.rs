//! Main entry point for the Fynancial GUI application.
//!
//! A single fixed-size window tracking one in-memory balance with
//! withdraw and deposit panels.

mod app;
mod helpers;
mod message;
mod styles;
mod types;
mod update;
mod view;

fn main() {
    if let Err(e) = app::run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
