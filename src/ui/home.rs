use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};
use std::time::Instant;

use super::hero::{self, FloatingShape};
use super::scroll::anchor_id;
use super::sections::{self, section};
use super::style;
use super::{contact, gallery, Thumbnails};
use crate::state::catalog::SiteContent;
use crate::state::contact::ContactState;
use crate::state::gallery::Gallery;
use crate::state::nav::{Anchor, Route};
use crate::state::slideshow::Slideshow;
use crate::{GalleryId, Message};

/// Everything the landing page reads
pub struct Landing<'a> {
    pub content: &'a SiteContent,
    pub featured: &'a Gallery,
    pub thumbnails: &'a Thumbnails,
    pub slideshow: &'a Slideshow,
    pub contact: &'a ContactState,
    pub hero: FloatingShape,
    pub now: Instant,
    pub year: i32,
}

pub fn view(landing: Landing<'_>) -> Element<'_, Message> {
    column![
        container(hero::view(landing.hero))
            .id(anchor_id(Anchor::Home))
            .width(Length::Fill),
        section(Anchor::About, sections::about(landing.content)),
        section(Anchor::Services, sections::services(landing.content)),
        section(
            Anchor::Portfolio,
            portfolio(landing.featured, landing.thumbnails, landing.now)
        ),
        section(
            Anchor::Testimonials,
            sections::testimonials(landing.content, landing.slideshow)
        ),
        section(
            Anchor::Contact,
            contact::view(landing.content, landing.contact)
        ),
        sections::footer(landing.year),
    ]
    .width(Length::Fill)
    .into()
}

fn portfolio<'a>(
    featured: &'a Gallery,
    thumbnails: &'a Thumbnails,
    now: Instant,
) -> Element<'a, Message> {
    column![
        style::section_title(
            "Featured Work",
            "A selection of my recent projects across branding, digital and motion design",
        ),
        container(gallery::filter_bar(featured, GalleryId::Featured)).center_x(Length::Fill),
        gallery::grid(featured, thumbnails, now),
        button(text("View All Projects →").size(17))
            .padding([14, 28])
            .style(button::secondary)
            .on_press(Message::Navigate(Route::AllProjects)),
    ]
    .spacing(40)
    .align_x(Alignment::Center)
    .into()
}
