//! Windup - a booking countdown with a rotary wheel for buying extra minutes
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod countdown;
mod feedback;
mod payment;
mod ui;
mod wheel;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(480.0, 680.0))
        .antialiasing(true)
        .run()
}
