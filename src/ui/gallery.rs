use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::sync::Arc;
use std::time::Instant;

use super::style::{self, ACCENT, MUTED};
use super::Thumbnails;
use crate::state::data::{CategoryFilter, Project};
use crate::state::gallery::Gallery;
use crate::{GalleryId, Message};

const CARD_WIDTH: f32 = 360.0;
const IMAGE_HEIGHT: f32 = 240.0;
/// Cards shrink to this fraction while faded out
const MIN_SCALE: f32 = 0.9;

/// Row of category buttons
pub fn filter_bar<'a>(gallery: &Gallery, id: GalleryId) -> Element<'a, Message> {
    let buttons = CategoryFilter::options().map(|filter| {
        let style = if filter == gallery.active() {
            button::primary
        } else {
            button::secondary
        };
        button(text(filter.label()).size(15))
            .padding([10, 22])
            .style(style)
            .on_press(Message::FilterSelected(id, filter))
            .into()
    });

    row(buttons).spacing(12).into()
}

/// The rendered projects as a wrapping grid of cards
pub fn grid<'a>(
    gallery: &'a Gallery,
    thumbnails: &'a Thumbnails,
    now: Instant,
) -> Element<'a, Message> {
    let transition = gallery.transition();
    let cards: Vec<Element<'a, Message>> = gallery
        .rendered()
        .iter()
        .enumerate()
        .map(|(index, project)| card(project, thumbnails, transition.item_alpha(index, now)))
        .collect();

    if cards.is_empty() {
        return container(text("No projects in this category yet.").color(MUTED))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

/// One clickable project tile, faded and scaled by `alpha`
pub fn card<'a>(project: &'a Arc<Project>, thumbnails: &'a Thumbnails, alpha: f32) -> Element<'a, Message> {
    let scale = MIN_SCALE + (1.0 - MIN_SCALE) * alpha;
    let faded = |color: Color| Color { a: color.a * alpha, ..color };

    let picture: Element<'a, Message> = match thumbnails.get(&project.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT * scale))
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => placeholder(project, IMAGE_HEIGHT * scale, alpha),
    };

    let body = column![
        picture,
        column![
            text(project.category.label().to_uppercase()).size(12).color(faded(ACCENT)),
            text(project.title.as_str()).size(20).color(faded(Color::WHITE)),
            text(project.client.as_str()).size(14).color(faded(MUTED)),
        ]
        .spacing(6)
        .padding(16),
    ];

    let tile = container(body)
        .width(Length::Fixed(CARD_WIDTH * scale))
        .style(style::card);

    // Fixed outer box so scaling does not reflow the grid
    container(mouse_area(tile).on_press(Message::ProjectSelected(Arc::clone(project))))
        .width(Length::Fixed(CARD_WIDTH))
        .center_x(Length::Fixed(CARD_WIDTH))
        .into()
}

/// Stand-in for an image that has not loaded (or never will)
pub fn placeholder<'a>(project: &'a Project, height: f32, alpha: f32) -> Element<'a, Message> {
    container(
        column![
            Space::with_height(Length::Fill),
            text(project.category.long_label())
                .size(16)
                .color(Color { a: 0.5 * alpha, ..Color::WHITE }),
            Space::with_height(Length::Fill),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .style(style::track)
    .into()
}
