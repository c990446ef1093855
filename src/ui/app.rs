// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// COSMIC application wiring and main app struct.

use super::message::AppMessage;
use super::model::AppModel;
use super::update;
use crate::ui::views;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::window;
use cosmic::{Action, Element, Task};

use crate::Args;
use crate::config::AppConfig;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct KarteiApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
}

impl cosmic::Application for KarteiApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.wfx.Kartei";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_else(|(errors, config)| {
                        for why in errors {
                            log::warn!("Config entry invalid, using default: {why}");
                        }
                        config
                    });
                    (config, Some(handler))
                }
                Err(e) => {
                    log::warn!("Config unavailable, using defaults: {e}");
                    (AppConfig::default(), None)
                }
            };

        let Flags::Args(args) = flags;
        let model = AppModel::new(&config);

        // CLI argument is opened through the regular path so a protected
        // document brings up the password dialog.
        let init_task = match args.file {
            Some(path) => Task::done(Action::App(AppMessage::OpenPath(path))),
            None => Task::none(),
        };

        (
            Self {
                core,
                model,
                config,
                config_handler,
            },
            init_task,
        )
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match update::update(self, message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        views::header::start(&self.model)
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        views::header::end(&self.model)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        views::canvas::view(&self.model)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        self.model.password.as_ref().map(views::password::view)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(views::footer::view(&self.model, &self.config))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl KarteiApp {
    /// Save current config to disk.
    pub fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            log::warn!("Failed to save config: {e}");
        }
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{ClearRegions, Export, NextPage, OpenDialog, PrevPage, UndoRegion};

    if modifiers.control() && !modifiers.shift() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character(ch) if ch.eq_ignore_ascii_case("o") => Some(OpenDialog),
            Key::Character(ch) if ch.eq_ignore_ascii_case("e") => Some(Export),
            Key::Character(ch) if ch.eq_ignore_ascii_case("z") => Some(UndoRegion),
            _ => None,
        };
    }

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(NextPage),
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(PrevPage),
        Key::Named(Named::Delete) => Some(ClearRegions),
        _ => None,
    }
}
