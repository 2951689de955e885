//! Application view rendering

use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Element, Fill, Font};

use super::{App, Message};
use crate::ui::{components, theme};

/// Timer card dimensions (also the confetti extent)
pub const CARD_WIDTH: f32 = 420.0;
pub const CARD_HEIGHT: f32 = 560.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let flash_alpha = self.flash_alpha;

        let header = text("TIME REMAINING").size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        // Big monospace readout; dims briefly when a payment lands
        let time = text(self.countdown.display())
            .size(72)
            .font(Font::MONOSPACE)
            .style(move |theme| text::Style {
                color: Some(theme::with_alpha(theme::text_primary(theme), flash_alpha)),
            });

        let hint = text("Spin the dial to extend your booking")
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            });

        let card_content = column![
            header,
            time,
            hint,
            Space::new().height(16),
            components::wheel::view(&self.published, &self.config),
        ]
        .align_x(Alignment::Center)
        .spacing(8)
        .padding(20);

        let card = container(card_content)
            .width(CARD_WIDTH)
            .height(CARD_HEIGHT)
            .style(theme::timer_card);

        // Confetti floats over the whole card while falling
        let card_area: Element<'_, Message> = if let Some(confetti) = &self.confetti {
            stack![
                card,
                components::confetti::view(confetti, CARD_WIDTH, CARD_HEIGHT),
            ]
            .into()
        } else {
            card.into()
        };

        container(card_area)
            .center(Fill)
            .style(theme::main_content)
            .into()
    }
}
