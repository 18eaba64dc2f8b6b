//! Shared colors, container styles and small building blocks

use iced::widget::{column, container, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme, Vector};

use crate::Message;

pub const ACCENT: Color = Color::from_rgb(0.424, 0.388, 1.0); // #6C63FF
pub const PINK: Color = Color::from_rgb(1.0, 0.42, 0.616); // #FF6B9D
pub const SURFACE: Color = Color::from_rgb(0.075, 0.075, 0.1);
pub const SURFACE_RAISED: Color = Color::from_rgb(0.11, 0.11, 0.15);
pub const MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
pub const ERROR: Color = Color::from_rgb(1.0, 0.36, 0.42);
pub const SUCCESS: Color = Color::from_rgb(0.3, 0.85, 0.55);

/// Max width of page content
pub const CONTENT_WIDTH: f32 = 1200.0;

/// Rounded panel used for cards
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_RAISED)),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// Card border highlighted in the accent color
pub fn card_active(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: ACCENT,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..card(theme)
    }
}

/// Dimmed backdrop behind modal surfaces
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.85))),
        ..container::Style::default()
    }
}

pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(Color::from_rgba(0.04, 0.04, 0.06, 0.92))),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 20.0,
                },
                ..container::Style::default()
            }
        } else {
            container::Style::default()
        }
    }
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        ..container::Style::default()
    }
}

/// Filled bar of a skill meter
pub fn progress(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Centered section heading with subtitle
pub fn section_title<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(44),
        text(subtitle).size(18).color(MUTED),
    ]
    .spacing(12)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Constrain content to the page width and center it
pub fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(content).max_width(CONTENT_WIDTH).padding([0, 24]))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
