//! Application state

use std::time::{Duration, Instant};

use crate::config::DialConfig;
use crate::countdown::Countdown;
use crate::feedback::Feedback;
use crate::ui::components::Confetti;
use crate::wheel::{Engine, Published};

/// Initial booking length
pub const START_MINUTES: i64 = 30;

/// How long the time display stays dimmed after a success
pub const FLASH_HOLD: Duration = Duration::from_millis(600);

pub struct App {
    /// Current dial configuration; the engine reads it on every event
    pub config: DialConfig,
    /// Gesture state machine (owns all drag/confirm state)
    pub engine: Engine,
    /// Frame-coalesced snapshot the view renders from
    pub published: Published,
    pub countdown: Countdown,
    pub feedback: Feedback,
    /// Success flash start, None when not flashing
    pub flash_started: Option<Instant>,
    /// Flash opacity for the time display, recomputed per frame
    pub flash_alpha: f32,
    pub confetti: Option<Confetti>,
    /// Previous animation frame, for particle timestep
    pub last_frame: Option<Instant>,
}

impl App {
    pub fn with_config(config: DialConfig) -> Self {
        Self {
            config,
            engine: Engine::new(),
            published: Published::default(),
            countdown: Countdown::from_minutes(START_MINUTES),
            feedback: Feedback::new(),
            flash_started: None,
            flash_alpha: 1.0,
            confetti: None,
            last_frame: None,
        }
    }
}
