//! Dial face primitive
//!
//! Draws the rotating wheel using iced's Canvas: a gradient outer ring,
//! an inner disc and snap notches. The whole face rotates with the
//! published rotation, so the gradient and notches carry the motion.
//!
//! Draw-only: pointer handling lives in the gesture surface widget, not
//! here.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

/// Ring segments used to approximate the gradient
const RING_SEGMENTS: usize = 48;

/// Dial face configuration
#[derive(Debug, Clone)]
pub struct DialFace {
    /// Visual rotation in degrees
    pub rotation_deg: f32,
    /// Stroke width of the outer ring
    pub line_width: f32,
    /// Ordered gradient stops for the ring
    pub stops: Vec<Color>,
    /// Angular notch spacing in degrees
    pub snap_degree: f32,
}

impl DialFace {
    pub fn new(rotation_deg: f32, line_width: f32, stops: Vec<Color>, snap_degree: f32) -> Self {
        Self {
            rotation_deg,
            line_width,
            stops,
            snap_degree,
        }
    }

    /// Sample the gradient at `t` in `[0, 1]`
    fn sample(&self, t: f32) -> Color {
        match self.stops.len() {
            0 => Color::from_rgb(0.5, 0.5, 0.5),
            1 => self.stops[0],
            n => {
                let scaled = t.clamp(0.0, 1.0) * (n - 1) as f32;
                let i = (scaled.floor() as usize).min(n - 2);
                let frac = scaled - i as f32;
                lerp(self.stops[i], self.stops[i + 1], frac)
            }
        }
    }
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

impl<Message> Program<Message> for DialFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let outer_radius = (bounds.width.min(bounds.height) / 2.0) - 1.0;
        let ring_radius = outer_radius - self.line_width / 2.0;
        let rotation = self.rotation_deg.to_radians();

        // Outer ring: stroked in short arcs with the gradient sampled
        // per segment; the sampling position shifts with the rotation
        // so the gradient visibly turns.
        let segment = std::f32::consts::TAU / RING_SEGMENTS as f32;
        for i in 0..RING_SEGMENTS {
            let start = i as f32 * segment + rotation;
            // Mirrored ramp over the full turn avoids a hard seam
            let u = (i as f32 + 0.5) / RING_SEGMENTS as f32;
            let t = 1.0 - (2.0 * u - 1.0).abs();
            let color = self.sample(t);

            let arc = Path::new(|builder| {
                builder.arc(iced::widget::canvas::path::Arc {
                    center,
                    radius: ring_radius,
                    start_angle: Radians(start),
                    // slight overlap hides segment boundaries
                    end_angle: Radians(start + segment * 1.05),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(self.line_width)
                    .with_color(color),
            );
        }

        // Inner disc
        let disc_radius = outer_radius - self.line_width;
        let disc = Path::circle(center, disc_radius);
        frame.fill(&disc, theme::surface(theme));

        // Snap notches across the ring band
        if self.snap_degree > 0.0 {
            let notch_count = (360.0 / self.snap_degree).round().max(1.0) as usize;
            let notch_inner = disc_radius + 3.0;
            let notch_outer = outer_radius - 3.0;
            for i in 0..notch_count {
                let angle = i as f32 * self.snap_degree.to_radians() + rotation;
                let (sin, cos) = angle.sin_cos();
                let notch = Path::line(
                    Point::new(center.x + cos * notch_inner, center.y + sin * notch_inner),
                    Point::new(center.x + cos * notch_outer, center.y + sin * notch_outer),
                );
                frame.stroke(
                    &notch,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(theme::with_alpha(theme::border_color(theme), 0.8)),
                );
            }
        }

        // Grip dot so the rotation reads even between notches
        let grip_angle = rotation - std::f32::consts::FRAC_PI_2;
        let (sin, cos) = grip_angle.sin_cos();
        let grip = Path::circle(
            Point::new(
                center.x + cos * (disc_radius - 14.0),
                center.y + sin * (disc_radius - 14.0),
            ),
            4.0,
        );
        frame.fill(&grip, theme::text_muted(theme));

        // Hairline rim
        let rim = Path::circle(center, outer_radius);
        frame.stroke(
            &rim,
            Stroke::default()
                .with_width(1.0)
                .with_color(theme::with_alpha(theme::border_color(theme), 0.6)),
        );

        vec![frame.into_geometry()]
    }
}

/// Create a dial face canvas element
pub fn view<'a, Message: 'a>(face: DialFace, size: f32) -> Element<'a, Message> {
    Canvas::new(face).width(size).height(size).into()
}
