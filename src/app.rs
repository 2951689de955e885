//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::DialConfig::load();
        tracing::info!(
            minute_step = config.minute_step,
            snap_degree = config.snap_degree,
            cost_per_minute = config.cost_per_minute,
            "dial configured"
        );

        (App::with_config(config), Task::none())
    }

    /// Window title, kept in sync with the countdown
    pub fn title(&self) -> String {
        format!("Windup — {}", self.countdown.display())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Subscriptions for the countdown tick and frame-driven animation
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        // 1. Countdown heartbeat, runs for the life of the app
        let countdown_sub =
            iced::time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick);

        // 2. Frames only while something moves: a live gesture, the
        //    confirm window, the success flash or falling confetti.
        let needs_frames = subscription_logic::needs_frame_subscription(
            self.engine.is_animating(),
            self.flash_started.is_some(),
            self.confetti.is_some(),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([countdown_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frame_subscription(
        gesture_active: bool,
        flash_active: bool,
        confetti_active: bool,
    ) -> bool {
        gesture_active || flash_active || confetti_active
    }
}
