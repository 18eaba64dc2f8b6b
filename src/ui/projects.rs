//! The all-projects page
//!
//! Projects are grouped by category. The quick nav drives the same
//! transition as the landing grid, so groups fade out and back in together.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;
use std::time::Instant;

use super::gallery::{card, filter_bar};
use super::style::{self, ACCENT, MUTED};
use super::Thumbnails;
use crate::state::gallery::Gallery;
use crate::state::nav::{Anchor, Route};
use crate::{GalleryId, Message};

pub fn view<'a>(gallery: &'a Gallery, thumbnails: &'a Thumbnails, now: Instant) -> Element<'a, Message> {
    let header = column![
        button(text("← Back to Home").size(15).color(ACCENT))
            .padding(0)
            .style(button::text)
            .on_press(Message::Navigate(Route::Home)),
        text("All Projects").size(56),
        text("Browse the complete collection of branding, digital, motion and 3D work")
            .size(18)
            .color(MUTED),
        filter_bar(gallery, GalleryId::Full),
    ]
    .spacing(20);

    let transition = gallery.transition();
    let rendered = gallery.rendered();
    let mut groups = column![].spacing(72);
    let mut shown = 0;

    for (category, members) in gallery.catalog().grouped() {
        let cards: Vec<Element<'a, Message>> = rendered
            .iter()
            .enumerate()
            .filter(|(_, project)| project.category == category)
            .map(|(index, project)| card(project, thumbnails, transition.item_alpha(index, now)))
            .collect();
        if cards.is_empty() {
            continue;
        }
        shown += cards.len();

        groups = groups.push(
            column![
                row![
                    text(category.long_label()).size(32),
                    Space::with_width(Length::Fill),
                    text(format!("{} Projects", members.len())).size(15).color(MUTED),
                ]
                .align_y(Alignment::Center),
                Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
            ]
            .spacing(28),
        );
    }

    if shown == 0 {
        groups = groups.push(
            container(text("No projects in this category yet.").color(MUTED))
                .padding(40)
                .center_x(Length::Fill),
        );
    }

    let closing = container(
        column![
            text("Have a project in mind?").size(32),
            text("Let's talk about how I can help bring your vision to life.")
                .size(16)
                .color(MUTED),
            button(text("Start a Project").size(17))
                .padding([14, 28])
                .style(button::primary)
                .on_press(Message::NavSelected(Anchor::Contact)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(style::card);

    style::centered(
        column![header, groups, closing]
            .spacing(64)
            .padding([140, 0]),
    )
}
