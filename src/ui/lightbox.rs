//! Modal detail view for one project.
//!
//! Layers, outermost first:
//! - an opaque backdrop that swallows scroll and clicks meant for the page
//! - a mouse area dismissing on backdrop clicks
//! - an opaque content panel, so clicks inside never reach the backdrop

use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, opaque, row, text};
use iced::{ContentFit, Element, Length};

use super::gallery::placeholder;
use super::style::{self, ACCENT, MUTED};
use super::Thumbnails;
use crate::state::data::Project;
use crate::state::overlay::Dismiss;
use crate::Message;

const PANEL_WIDTH: f32 = 900.0;
const IMAGE_HEIGHT: f32 = 420.0;

pub fn view<'a>(project: &'a Project, thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnails.get(&project.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(project, IMAGE_HEIGHT, 1.0),
    };

    let close = button(text("✕").size(20))
        .padding([6, 12])
        .style(button::text)
        .on_press(Message::LightboxDismissed(Dismiss::CloseButton));

    let meta = row![
        meta_item("Client", &project.client),
        meta_item("Year", &project.year),
    ]
    .spacing(48);

    let panel = container(
        column![
            row![horizontal_space(), close],
            picture,
            text(project.category.long_label()).size(14).color(ACCENT),
            text(project.title.as_str()).size(34),
            text(project.description.as_str()).size(17).color(MUTED),
            meta,
        ]
        .spacing(16),
    )
    .max_width(PANEL_WIDTH)
    .padding(28)
    .style(style::card);

    opaque(
        mouse_area(center(opaque(panel)).padding(40).style(style::backdrop))
            .on_press(Message::LightboxDismissed(Dismiss::Backdrop)),
    )
}

fn meta_item<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    column![text(label).size(13).color(MUTED), text(value).size(18)]
        .spacing(4)
        .into()
}
