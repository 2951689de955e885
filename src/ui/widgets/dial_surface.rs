//! Dial gesture surface
//!
//! A transparent widget layered over the dial face that turns pointer
//! input into angle messages. It owns nothing but the drag flag; all
//! gesture math happens in the wheel engine.
//!
//! Angles are measured like the platform convention the engine expects:
//! degrees from the widget center, `atan2(dy, dx)`, in `(-180, 180]`.
//!
//! A press inside the center hub is reported separately (used to cancel
//! a running confirm sequence) and never starts a drag; the hub is the
//! overlay's tap target.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::mouse;
use iced::touch;
use iced::{Element, Event, Length, Point, Rectangle, Size, Theme};

pub struct DialSurface<'a, Message> {
    size: f32,
    hub_radius: f32,
    on_grab: Box<dyn Fn(f32) -> Message + 'a>,
    on_turn: Box<dyn Fn(f32) -> Message + 'a>,
    on_release: Message,
    on_hub_press: Message,
}

impl<'a, Message> DialSurface<'a, Message>
where
    Message: Clone,
{
    pub fn new<G, T>(
        size: f32,
        on_grab: G,
        on_turn: T,
        on_release: Message,
        on_hub_press: Message,
    ) -> Self
    where
        G: 'a + Fn(f32) -> Message,
        T: 'a + Fn(f32) -> Message,
    {
        Self {
            size,
            hub_radius: size * 0.18,
            on_grab: Box::new(on_grab),
            on_turn: Box::new(on_turn),
            on_release,
            on_hub_press,
        }
    }

    /// Override the hub (tap-to-cancel) radius
    pub fn hub_radius(mut self, radius: f32) -> Self {
        self.hub_radius = radius;
        self
    }
}

/// Pointer angle around `center` in degrees, `(-180, 180]`
fn angle_at(center: Point, position: Point) -> f32 {
    (position.y - center.y)
        .atan2(position.x - center.x)
        .to_degrees()
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for DialSurface<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fixed(self.size),
            height: Length::Fixed(self.size),
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.size, self.size)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let center = bounds.center();

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    if position.distance(center) <= self.hub_radius {
                        shell.publish(self.on_hub_press.clone());
                    } else {
                        shell.publish((self.on_grab)(angle_at(center, position)));
                        state.is_dragging = true;
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_dragging {
                    shell.publish(self.on_release.clone());
                    state.is_dragging = false;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                // Keep tracking outside the bounds while the drag holds,
                // like a pointer capture.
                if state.is_dragging {
                    if let Some(position) = cursor.land().position() {
                        shell.publish((self.on_turn)(angle_at(center, position)));
                    }
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        // Transparent event layer; the dial face canvas below does the
        // drawing.
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<DialSurface<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(surface: DialSurface<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(surface)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct State {
    is_dragging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_matches_pointer_quadrants() {
        let center = Point::new(100.0, 100.0);
        assert_eq!(angle_at(center, Point::new(150.0, 100.0)), 0.0);
        assert_eq!(angle_at(center, Point::new(100.0, 150.0)), 90.0);
        assert_eq!(angle_at(center, Point::new(50.0, 100.0)), 180.0);
        assert_eq!(angle_at(center, Point::new(100.0, 50.0)), -90.0);
    }
}
