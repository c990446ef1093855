// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Application entry point.

use clap::Parser;

use kartei::Args;
use kartei::ui::{Flags, KarteiApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("kartei=info"))
        .init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    kartei::i18n::init(&requested_languages);

    let args = Args::parse();
    log::debug!("Starting with {args:?}");

    let settings = cosmic::app::Settings::default()
        .size_limits(cosmic::iced::Limits::NONE.min_width(480.0).min_height(360.0));

    cosmic::app::run::<KarteiApp>(settings, Flags::Args(args))?;
    Ok(())
}
