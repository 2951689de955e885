//! Application update logic

use std::time::Instant;

use iced::Task;

use super::state::FLASH_HOLD;
use super::view::{CARD_HEIGHT, CARD_WIDTH};
use super::{App, Message};
use crate::payment;
use crate::ui::components::Confetti;
use crate::wheel::EngineEvent;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DialGrabbed(angle) => {
                self.engine.pointer_down(angle);
                self.published = self.engine.published();
                Task::none()
            }
            Message::DialTurned(angle) => {
                // Internal state updates synchronously per move; the
                // published snapshot waits for the next frame tick.
                if self.engine.pointer_move(angle, &self.config) {
                    self.feedback.tick(&self.config);
                }
                Task::none()
            }
            Message::DialReleased => {
                self.engine.pointer_up(Instant::now());
                self.published = self.engine.published();
                Task::none()
            }
            Message::HubPressed => {
                if self.engine.cancel() {
                    tracing::info!("confirm sequence cancelled");
                    self.published = self.engine.published();
                }
                Task::none()
            }
            Message::AnimationTick => self.on_frame(Instant::now()),
            Message::CountdownTick => {
                self.countdown.tick();
                Task::none()
            }
            Message::PaymentSettled(success) => self.on_payment_settled(success, Instant::now()),
        }
    }

    /// Per-frame driver: advances the engine's timed transitions,
    /// copies out one published snapshot (coalescing however many
    /// pointer moves landed since the last frame) and steps the
    /// celebration effects.
    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        let dt = self
            .last_frame
            .map(|t| now.saturating_duration_since(t).as_secs_f32())
            .unwrap_or(1.0 / 60.0)
            .min(0.1);
        self.last_frame = Some(now);

        let task = match self.engine.advance(now, &self.config) {
            Some(EngineEvent::PaymentDue { minutes, cost }) => {
                Task::perform(payment::process(minutes, cost), Message::PaymentSettled)
            }
            Some(EngineEvent::CelebrationOver { minutes }) => {
                self.countdown.extend_minutes(minutes);
                tracing::info!(minutes, "booking extended");
                Task::none()
            }
            None => Task::none(),
        };

        self.published = self.engine.published();

        if let Some(started) = self.flash_started {
            let progress =
                now.saturating_duration_since(started).as_secs_f32() / FLASH_HOLD.as_secs_f32();
            if progress >= 1.0 {
                self.flash_started = None;
                self.flash_alpha = 1.0;
            } else {
                // Dip to 0.3, then ease back to full
                self.flash_alpha = 0.3 + 0.7 * progress;
            }
        }

        if let Some(confetti) = &mut self.confetti {
            confetti.advance(dt);
            if confetti.is_done() {
                self.confetti = None;
            }
        }

        task
    }

    fn on_payment_settled(&mut self, success: bool, now: Instant) -> Task<Message> {
        // The engine only accepts a settlement while one is
        // outstanding; a duplicate or stray result ends here.
        if !self.engine.payment_settled(success, now) {
            tracing::warn!(success, "dropping unexpected payment settlement");
            return Task::none();
        }

        if success {
            self.flash_started = Some(now);
            self.flash_alpha = 0.3;
            self.confetti = Some(Confetti::burst(CARD_WIDTH, CARD_HEIGHT));
            self.feedback.success(&self.config);
        } else {
            tracing::info!("payment declined, dial reset");
        }
        self.published = self.engine.published();
        Task::none()
    }
}
