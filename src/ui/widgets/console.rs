// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/console.rs
//
// Terminal-side controls, opener and navigator for the console host.

use crate::ui::{Controls, CropComplete, Navigator, Opener, SaveLabel};

/// Controls that report every change through the log.
#[derive(Debug, Default)]
pub struct LogControls {
    pub alerts: Vec<String>,
}

impl Controls for LogControls {
    fn set_reset_enabled(&mut self, enabled: bool) {
        log::debug!("Reset control enabled: {enabled}");
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        log::debug!("Save control enabled: {enabled}");
    }

    fn set_save_label(&mut self, label: SaveLabel) {
        log::info!("Save control: {}", label.text());
    }

    fn set_readout(&mut self, text: Option<&str>) {
        match text {
            Some(text) => log::info!("Selection: {text}"),
            None => log::debug!("Selection readout hidden"),
        }
    }

    fn alert(&mut self, message: &str) {
        log::warn!("{message}");
        eprintln!("{message}");
        self.alerts.push(message.to_string());
    }
}

/// Prints opener messages to stdout as JSON, one per line.
#[derive(Debug, Default)]
pub struct StdoutOpener;

impl Opener for StdoutOpener {
    fn post_message(&mut self, message: &CropComplete) {
        match serde_json::to_string(message) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode opener message: {e}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&mut self, location: &str) {
        log::info!("Navigate to {location}");
    }
}
