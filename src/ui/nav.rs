//! Fixed navigation bar and the compact menu

use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Length};

use super::style::{self, ACCENT, MUTED};
use crate::state::nav::{Anchor, Navigator, Route, HEADER_OFFSET};
use crate::Message;

/// Below this window width the links collapse into a menu
pub const COMPACT_WIDTH: f32 = 900.0;

const MENU_WIDTH: f32 = 320.0;

/// Links shown in the bar; testimonials are reached by scrolling
const LINKS: [Anchor; 5] = [
    Anchor::Home,
    Anchor::About,
    Anchor::Services,
    Anchor::Portfolio,
    Anchor::Contact,
];

pub fn navbar(nav: &Navigator, compact: bool) -> Element<'_, Message> {
    let logo = button(row![text("Studio").size(26), text(".").size(26).color(ACCENT)])
        .padding(0)
        .style(button::text)
        .on_press(Message::NavSelected(Anchor::Home));

    let mut bar = row![logo, horizontal_space()]
        .spacing(28)
        .align_y(Alignment::Center);

    if compact {
        let icon = if nav.is_menu_open() { "✕" } else { "☰" };
        bar = bar.push(
            button(text(icon).size(24))
                .style(button::text)
                .on_press(Message::ToggleMenu),
        );
    } else {
        for anchor in LINKS {
            bar = bar.push(link(nav, anchor, 16));
        }
        bar = bar.push(
            button(text("Let's Talk").size(16))
                .padding([10, 22])
                .style(button::primary)
                .on_press(Message::NavSelected(Anchor::Contact)),
        );
    }

    container(style::centered(bar))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_OFFSET))
        .center_y(Length::Fixed(HEADER_OFFSET))
        .style(style::navbar(nav.is_scrolled()))
        .into()
}

/// Slide-in menu for narrow windows. Clicking beside the panel closes it.
pub fn menu(nav: &Navigator) -> Element<'_, Message> {
    let mut links = column![].spacing(18);
    for anchor in LINKS {
        links = links.push(link(nav, anchor, 22));
    }
    links = links.push(
        button(text("All Projects").size(22))
            .padding(0)
            .style(button::text)
            .on_press(Message::Navigate(Route::AllProjects)),
    );

    let panel = container(
        column![
            links,
            button(text("Let's Talk").size(18))
                .padding([12, 24])
                .style(button::primary)
                .on_press(Message::NavSelected(Anchor::Contact)),
        ]
        .spacing(32),
    )
    .padding([HEADER_OFFSET + 24.0, 32.0])
    .width(Length::Fixed(MENU_WIDTH))
    .height(Length::Fill)
    .style(style::card);

    opaque(
        mouse_area(
            container(row![horizontal_space(), opaque(panel)])
                .width(Length::Fill)
                .height(Length::Fill)
                .style(style::backdrop),
        )
        .on_press(Message::ToggleMenu),
    )
}

fn link(nav: &Navigator, anchor: Anchor, size: u16) -> Element<'static, Message> {
    let active = nav.route() == Route::Home && nav.active() == anchor;
    let color = if active { ACCENT } else { MUTED };

    button(text(anchor.label()).size(size).color(color))
        .padding(0)
        .style(button::text)
        .on_press(Message::NavSelected(anchor))
        .into()
}
