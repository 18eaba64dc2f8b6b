//! Hero section with a decorative rotating 3D shape
//!
//! The shape is a wireframe icosahedron, a tilted ring and a particle cloud,
//! projected onto a canvas with a simple perspective divide.
use cgmath::{InnerSpace, Matrix3, Rad, Vector3};
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::{button, canvas as canvas_widget, column, container, row, stack, text};
use iced::{Alignment, Color, Element, Length, Point, Rectangle};

use super::style::{self, ACCENT, MUTED, PINK};
use crate::state::nav::Anchor;
use crate::Message;

/// Camera distance for the perspective divide
const CAMERA_DISTANCE: f32 = 4.0;
const PARTICLE_COUNT: usize = 50;
const RING_SEGMENTS: usize = 64;
const HERO_HEIGHT: f32 = 720.0;

/// Canvas program for the floating shape
#[derive(Debug, Clone, Copy)]
pub struct FloatingShape {
    /// Seconds since the landing page mounted
    pub time: f32,
    /// Base rotation speed in radians per second
    pub speed: f32,
}

impl FloatingShape {
    fn project(&self, point: Vector3<f32>, center: Point, scale: f32) -> Point {
        let depth = CAMERA_DISTANCE / (CAMERA_DISTANCE + point.z);
        Point::new(
            center.x + point.x * scale * depth,
            center.y - point.y * scale * depth,
        )
    }
}

impl canvas::Program<Message> for FloatingShape {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let t = self.time;
        let scale = bounds.width.min(bounds.height) * 0.22;
        // Gentle float up and down
        let bob = (t * 2.0).sin() * 0.2;
        let center = Point::new(bounds.width * 0.68, bounds.height * 0.5 - bob * scale);

        // Particles drift slowly around everything else
        let drift = Matrix3::from_angle_y(Rad(t * 0.05)) * Matrix3::from_angle_x(Rad(t * 0.02));
        for point in particles() {
            let p = self.project(drift * point, center, scale * 0.6);
            frame.fill(&Path::circle(p, 1.5), Color { a: 0.6, ..ACCENT });
        }

        // Icosahedron
        let rotation = Matrix3::from_angle_x(Rad(t * self.speed * 0.67))
            * Matrix3::from_angle_y(Rad(t * self.speed));
        let vertices: Vec<Point> = icosahedron_vertices()
            .into_iter()
            .map(|v| self.project(rotation * v, center, scale))
            .collect();

        let mut edges = canvas::path::Builder::new();
        for (a, b) in icosahedron_edges() {
            edges.move_to(vertices[a]);
            edges.line_to(vertices[b]);
        }
        frame.stroke(
            &edges.build(),
            Stroke::default().with_color(ACCENT).with_width(2.0),
        );
        for vertex in &vertices {
            frame.fill(&Path::circle(*vertex, 3.0), ACCENT);
        }

        // Ring, offset to the upper right
        let ring_rotation = Matrix3::from_angle_x(Rad(t * 0.5)) * Matrix3::from_angle_z(Rad(t * 0.3));
        let ring_center = Vector3::new(2.0, 1.0, -1.0);
        let mut ring = canvas::path::Builder::new();
        for i in 0..=RING_SEGMENTS {
            let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
            let local = Vector3::new(angle.cos(), angle.sin(), 0.0) * 0.5;
            let p = self.project(ring_rotation * local + ring_center, center, scale);
            if i == 0 {
                ring.move_to(p);
            } else {
                ring.line_to(p);
            }
        }
        frame.stroke(&ring.build(), Stroke::default().with_color(PINK).with_width(4.0));

        vec![frame.into_geometry()]
    }
}

/// The 12 vertices of a unit-ish icosahedron, normalized to radius 1
fn icosahedron_vertices() -> Vec<Vector3<f32>> {
    let phi = (1.0 + 5f32.sqrt()) / 2.0;
    let raw = [
        (-1.0, phi, 0.0), (1.0, phi, 0.0), (-1.0, -phi, 0.0), (1.0, -phi, 0.0),
        (0.0, -1.0, phi), (0.0, 1.0, phi), (0.0, -1.0, -phi), (0.0, 1.0, -phi),
        (phi, 0.0, -1.0), (phi, 0.0, 1.0), (-phi, 0.0, -1.0), (-phi, 0.0, 1.0),
    ];
    raw.iter()
        .map(|&(x, y, z)| Vector3::new(x, y, z).normalize())
        .collect()
}

/// Vertex pairs at the shortest distance form the 30 edges
fn icosahedron_edges() -> Vec<(usize, usize)> {
    let vertices = icosahedron_vertices();
    let shortest = vertices
        .iter()
        .skip(1)
        .map(|v| (*v - vertices[0]).magnitude())
        .fold(f32::MAX, f32::min);

    let mut edges = Vec::with_capacity(30);
    for a in 0..vertices.len() {
        for b in (a + 1)..vertices.len() {
            if ((vertices[a] - vertices[b]).magnitude() - shortest).abs() < 1e-3 {
                edges.push((a, b));
            }
        }
    }
    edges
}

/// Deterministic particle cloud in a 10x10x10 box around the origin
fn particles() -> impl Iterator<Item = Vector3<f32>> {
    let mut seed: u32 = 0x2545_f491;
    let mut next = move || {
        // xorshift32
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        (seed as f32 / u32::MAX as f32 - 0.5) * 10.0
    };
    (0..PARTICLE_COUNT).map(move |_| Vector3::new(next(), next(), next()) * 0.35)
}

pub fn view<'a>(shape: FloatingShape) -> Element<'a, Message> {
    let content = column![
        container(text("✦ Available for Freelance Work").size(14).color(ACCENT))
            .padding([6, 14])
            .style(style::card),
        text("Creative").size(96),
        text("Designer").size(96).color(ACCENT),
        text("Transforming ideas into stunning visual experiences.").size(20),
        text("Logo Design • Brand Identity • UI/UX • Motion Graphics • 3D Visuals")
            .size(16)
            .color(MUTED),
        row![
            button(text("View My Work →").size(18))
                .padding([14, 28])
                .style(button::primary)
                .on_press(Message::NavSelected(Anchor::Portfolio)),
            button(text("Let's Talk").size(18))
                .padding([14, 28])
                .style(button::secondary)
                .on_press(Message::NavSelected(Anchor::Contact)),
        ]
        .spacing(16),
        row![
            stat("150+", "Projects Completed"),
            stat("50+", "Happy Clients"),
            stat("8+", "Years Experience"),
        ]
        .spacing(48),
    ]
    .spacing(20)
    .padding([140, 0]);

    stack![
        canvas_widget(shape)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT)),
        style::centered(content),
    ]
    .width(Length::Fill)
    .height(Length::Fixed(HERO_HEIGHT))
    .into()
}

fn stat<'a>(number: &'a str, label: &'a str) -> Element<'a, Message> {
    column![text(number).size(36).color(ACCENT), text(label).size(14).color(MUTED)]
        .spacing(4)
        .align_x(Alignment::Start)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_has_thirty_edges() {
        let edges = icosahedron_edges();
        assert_eq!(edges.len(), 30);

        // Every vertex touches exactly five edges
        for v in 0..12 {
            let degree = edges.iter().filter(|(a, b)| *a == v || *b == v).count();
            assert_eq!(degree, 5);
        }
    }

    #[test]
    fn test_particles_are_deterministic_and_bounded() {
        let first: Vec<_> = particles().collect();
        let second: Vec<_> = particles().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert!(first.iter().all(|p| p.x.abs() <= 1.75 && p.y.abs() <= 1.75 && p.z.abs() <= 1.75));
    }

    #[test]
    fn test_projection_shrinks_far_points() {
        let shape = FloatingShape { time: 0.0, speed: 0.3 };
        let center = Point::new(0.0, 0.0);
        let near = shape.project(Vector3::new(1.0, 0.0, -1.0), center, 100.0);
        let far = shape.project(Vector3::new(1.0, 0.0, 1.0), center, 100.0);
        assert!(near.x > far.x);
    }
}
