//! Wheel presentation
//!
//! Renders the dial face, the transparent gesture surface and the
//! overlay (minute delta, cost, confirm progress bar). Purely driven by
//! the engine's published snapshot; input flows back only through the
//! dial surface's messages.

use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Color, Element, Length};

use crate::app::Message;
use crate::config::DialConfig;
use crate::ui::primitives::dial_face::{self, DialFace};
use crate::ui::theme;
use crate::ui::widgets::DialSurface;
use crate::wheel::Published;

/// Dial diameter in logical pixels
pub const WHEEL_SIZE: f32 = 260.0;

/// Signed minute label, e.g. `+5 m`
pub fn minutes_label(minutes: i32) -> String {
    if minutes > 0 {
        format!("+{} m", minutes)
    } else {
        format!("{} m", minutes)
    }
}

/// Signed cost label, e.g. `+$1.75` / `–$0.70`
pub fn cost_label(minutes: i32, cost_per_minute: f64) -> String {
    let dollars = minutes.abs() as f64 * cost_per_minute;
    let sign = if minutes >= 0 { '+' } else { '–' };
    format!("{}${:.2}", sign, dollars)
}

pub fn view<'a>(published: &Published, config: &DialConfig) -> Element<'a, Message> {
    let stops: Vec<Color> = config
        .ring_gradient
        .colors
        .iter()
        .map(|c| Color::from_rgba(c[0], c[1], c[2], c[3]))
        .collect();

    let face = dial_face::view(
        DialFace::new(
            published.rotation_deg,
            config.ring_line_width,
            stops,
            config.snap_degree,
        ),
        WHEEL_SIZE,
    );

    let surface: Element<'a, Message> = DialSurface::new(
        WHEEL_SIZE,
        Message::DialGrabbed,
        Message::DialTurned,
        Message::DialReleased,
        Message::HubPressed,
    )
    .hub_radius(WHEEL_SIZE * 0.23)
    .into();

    container(stack![face, overlay(published, config), surface])
        .width(WHEEL_SIZE)
        .height(WHEEL_SIZE)
        .into()
}

/// Center overlay: delta + cost + confirm bar while a gesture is live,
/// a spin hint otherwise. Fades out during the celebration.
fn overlay<'a>(published: &Published, config: &DialConfig) -> Element<'a, Message> {
    let alpha = if published.celebrating { 0.0 } else { 1.0 };

    let content: Element<'a, Message> = if published.overlay_visible && published.delta_minutes != 0
    {
        let delta_color = if published.delta_minutes > 0 {
            theme::DELTA_POSITIVE
        } else {
            theme::DELTA_NEGATIVE
        };

        column![
            text(minutes_label(published.delta_minutes))
                .size(28)
                .color(theme::with_alpha(delta_color, alpha)),
            text(cost_label(
                published.delta_minutes,
                config.cost_per_minute
            ))
            .size(16)
            .style(move |theme| text::Style {
                color: Some(theme::with_alpha(theme::text_muted(theme), alpha)),
            }),
            Space::new().height(6),
            confirm_bar(published.confirm_progress, config, alpha),
        ]
        .align_x(Alignment::Center)
        .into()
    } else {
        // Spin affordance
        text("⟳")
            .size(34)
            .style(move |theme| text::Style {
                color: Some(theme::with_alpha(theme::text_muted(theme), alpha)),
            })
            .into()
    };

    container(content)
        .center(Length::Fill)
        .into()
}

/// Hold-to-confirm progress bar, fill fraction = confirm progress
fn confirm_bar<'a>(progress: f32, config: &DialConfig, alpha: f32) -> Element<'a, Message> {
    let width = config.overlay_bar_width;
    let height = config.overlay_bar_height;
    let fill_width = width * progress.clamp(0.0, 1.0);

    let fill = container(Space::new().width(fill_width).height(height)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::with_alpha(
                theme::ACCENT,
                alpha,
            ))),
            border: iced::Border {
                radius: (height / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    container(fill)
        .width(width)
        .height(height)
        .align_x(Alignment::Start)
        .style(move |theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::with_alpha(
                theme::border_color(theme),
                alpha,
            ))),
            border: iced::Border {
                radius: (height / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
