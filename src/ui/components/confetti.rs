//! Celebration confetti
//!
//! A short-lived particle burst drawn over the card after a successful
//! payment. Advanced once per animation frame and dropped when every
//! particle has fallen out of view.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};
use rand::Rng;

const PARTICLE_COUNT: usize = 150;
const GRAVITY: f32 = 420.0;

const PALETTE: [Color; 6] = [
    Color::from_rgb(0.96, 0.65, 0.14),
    Color::from_rgb(0.18, 0.80, 0.44),
    Color::from_rgb(0.20, 0.60, 0.86),
    Color::from_rgb(0.91, 0.30, 0.24),
    Color::from_rgb(0.61, 0.35, 0.71),
    Color::from_rgb(0.95, 0.77, 0.06),
];

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    angle: f32,
    spin: f32,
    color: Color,
}

/// A single burst of confetti
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    extent: f32,
}

impl Confetti {
    /// Spawn a burst across the top of a `width` × `height` area
    pub fn burst(width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(-40.0..0.0),
                vx: rng.random_range(-70.0..70.0),
                vy: rng.random_range(40.0..240.0),
                size: rng.random_range(4.0..9.0),
                angle: rng.random_range(0.0..std::f32::consts::TAU),
                spin: rng.random_range(-6.0..6.0),
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();
        Self {
            particles,
            extent: height,
        }
    }

    /// Step the simulation by `dt` seconds, dropping fallen particles
    pub fn advance(&mut self, dt: f32) {
        let extent = self.extent;
        for p in &mut self.particles {
            p.vy += GRAVITY * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.angle += p.spin * dt;
        }
        self.particles.retain(|p| p.y < extent + 20.0);
    }

    pub fn is_done(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Borrowing drawer so the canvas can render app-owned state
struct ConfettiDrawer<'a> {
    particles: &'a [Particle],
}

impl<Message> Program<Message> for ConfettiDrawer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for p in self.particles {
            let (sin, cos) = p.angle.sin_cos();
            let hw = p.size / 2.0;
            let hh = p.size / 3.0;
            // Rotated rectangle, corners computed by hand
            let corners = [
                (-hw, -hh),
                (hw, -hh),
                (hw, hh),
                (-hw, hh),
            ]
            .map(|(dx, dy)| {
                Point::new(p.x + dx * cos - dy * sin, p.y + dx * sin + dy * cos)
            });

            let piece = Path::new(|builder| {
                builder.move_to(corners[0]);
                builder.line_to(corners[1]);
                builder.line_to(corners[2]);
                builder.line_to(corners[3]);
                builder.close();
            });
            frame.fill(&piece, p.color);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a confetti canvas element covering the given area
pub fn view<'a, Message: 'a>(confetti: &'a Confetti, width: f32, height: f32) -> Element<'a, Message> {
    Canvas::new(ConfettiDrawer {
        particles: &confetti.particles,
    })
    .width(width)
    .height(height)
    .into()
}
