// SPDX-License-Identifier: MPL-2.0

mod app;
mod config;
mod i18n;
mod pages;
mod palette;
mod widgets;

fn main() -> cosmic::iced::Result {
    env_logger::init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size_limits(cosmic::iced::Limits::NONE.min_width(360.0).min_height(180.0));

    cosmic::app::run::<app::AppModel>(settings, ())
}
