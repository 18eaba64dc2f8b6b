//! Static landing sections: about, services, testimonials and footer

use iced::widget::{button, column, container, horizontal_rule, row, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::scroll::anchor_id;
use super::style::{self, ACCENT, MUTED};
use crate::state::catalog::SiteContent;
use crate::state::data::{Service, Skill, Stat, Testimonial};
use crate::state::nav::{Anchor, Route};
use crate::state::slideshow::Slideshow;
use crate::Message;

const SECTION_PADDING: u16 = 96;

/// Wrap a section body so nav links can find it
pub fn section<'a>(anchor: Anchor, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(style::centered(body))
        .id(anchor_id(anchor))
        .padding([SECTION_PADDING, 0])
        .width(Length::Fill)
        .into()
}

pub fn about(content: &SiteContent) -> Element<'_, Message> {
    let portrait = container(
        column![
            text("8+").size(56).color(ACCENT),
            text("Years of Experience").size(16).color(MUTED),
        ]
        .align_x(Alignment::Center)
        .spacing(8),
    )
    .width(Length::Fixed(380.0))
    .height(Length::Fixed(460.0))
    .center_x(Length::Fixed(380.0))
    .center_y(Length::Fixed(460.0))
    .style(style::card_active);

    let skills = column(content.skills.iter().map(skill_bar)).spacing(14);

    let bio = column![
        text("I'm a Creative Designer who loves bringing ideas to life").size(30),
        text(
            "With over 8 years of experience in graphic design and creative branding, \
             I've had the privilege of working with startups and established brands alike. \
             My approach combines strategic thinking with creative execution to deliver \
             designs that not only look beautiful but also drive results."
        )
        .size(16)
        .color(MUTED),
        text(
            "I believe great design is about solving problems and telling stories. \
             Every project is an opportunity to create something unique that resonates \
             with the target audience and elevates the brand."
        )
        .size(16)
        .color(MUTED),
        text("My Skills").size(20),
        skills,
    ]
    .spacing(18)
    .width(Length::Fill);

    let stats = row(content.stats.iter().map(stat_card)).spacing(24);

    column![
        style::section_title(
            "About Me",
            "Passionate about creating meaningful designs that connect brands with their audience",
        ),
        row![portrait, bio].spacing(56),
        stats,
    ]
    .spacing(56)
    .into()
}

fn skill_bar(skill: &Skill) -> Element<'_, Message> {
    let level = u16::from(skill.level.min(100));
    let mut bar = row![container(Space::with_height(Length::Fixed(8.0)))
        .width(Length::FillPortion(level.max(1)))
        .style(style::progress)];
    if level < 100 {
        bar = bar.push(Space::with_width(Length::FillPortion(100 - level)));
    }

    column![
        row![
            text(skill.name.as_str()).size(15),
            Space::with_width(Length::Fill),
            text(format!("{}%", skill.level)).size(15).color(ACCENT),
        ],
        container(bar).width(Length::Fill).style(style::track),
    ]
    .spacing(8)
    .into()
}

fn stat_card(stat: &Stat) -> Element<'_, Message> {
    container(
        column![
            text(stat.number.as_str()).size(40).color(ACCENT),
            text(stat.label.as_str()).size(14).color(MUTED),
        ]
        .align_x(Alignment::Center)
        .spacing(6),
    )
    .padding(28)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(style::card)
    .into()
}

pub fn services(content: &SiteContent) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = content.services.iter().map(service_card).collect();

    column![
        style::section_title(
            "Services",
            "Comprehensive design solutions to help your brand stand out",
        ),
        Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
    ]
    .spacing(56)
    .into()
}

fn service_card(service: &Service) -> Element<'_, Message> {
    let features = column(
        service
            .features
            .iter()
            .map(|feature| text(format!("• {}", feature)).size(14).color(MUTED).into()),
    )
    .spacing(6);

    container(
        column![
            text(service.title.as_str()).size(22),
            text(service.description.as_str()).size(15).color(MUTED),
            features,
            text("Learn more ↗").size(14).color(ACCENT),
        ]
        .spacing(14),
    )
    .padding(28)
    .width(Length::Fixed(360.0))
    .style(style::card)
    .into()
}

pub fn testimonials<'a>(content: &'a SiteContent, slideshow: &Slideshow) -> Element<'a, Message> {
    let slide: Element<'a, Message> = match content.testimonials.get(slideshow.index()) {
        Some(testimonial) => testimonial_card(testimonial),
        None => Space::with_height(Length::Fixed(0.0)).into(),
    };

    let dots = row((0..slideshow.len()).map(|index| {
        let style = if index == slideshow.index() {
            button::primary
        } else {
            button::secondary
        };
        button(Space::new(Length::Fixed(10.0), Length::Fixed(10.0)))
            .padding(0)
            .style(style)
            .on_press(Message::SlideSelected(index))
            .into()
    }))
    .spacing(10);

    let controls = row![
        button(text("‹").size(20)).style(button::text).on_press(Message::SlidePrevious),
        dots,
        button(text("›").size(20)).style(button::text).on_press(Message::SlideNext),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let brands = row(content
        .brands
        .iter()
        .map(|brand| text(brand.as_str()).size(22).color(MUTED).into()))
    .spacing(48);

    column![
        style::section_title(
            "Client Love",
            "Hear what my amazing clients have to say about working together",
        ),
        slide,
        controls,
        text("Trusted by leading brands").size(14).color(MUTED),
        brands,
    ]
    .spacing(32)
    .align_x(Alignment::Center)
    .into()
}

fn testimonial_card(testimonial: &Testimonial) -> Element<'_, Message> {
    let stars = "★".repeat(usize::from(testimonial.rating.min(5)));

    container(
        column![
            text("“").size(64).color(ACCENT),
            text(format!("\"{}\"", testimonial.content)).size(19),
            text(stars).size(18).color(ACCENT),
            column![
                text(testimonial.name.as_str()).size(18),
                text(testimonial.role.as_str()).size(14).color(MUTED),
            ]
            .spacing(4),
        ]
        .spacing(18),
    )
    .padding(40)
    .max_width(820.0)
    .style(style::card)
    .into()
}

pub fn footer(year: i32) -> Element<'static, Message> {
    let navigation = column(
        [Anchor::Home, Anchor::About, Anchor::Services, Anchor::Portfolio, Anchor::Contact]
            .into_iter()
            .map(|anchor| {
                button(text(anchor.label()).size(14))
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::NavSelected(anchor))
                    .into()
            }),
    )
    .spacing(10);

    let services = column(
        ["Logo Design", "Brand Identity", "UI/UX Design", "Motion Graphics", "3D Visuals"]
            .into_iter()
            .map(|label| {
                button(text(label).size(14))
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::NavSelected(Anchor::Services))
                    .into()
            }),
    )
    .spacing(10);

    let columns = row![
        column![
            text("Studio").size(28).color(ACCENT),
            text("Creative designer crafting brand identities, digital experiences and motion.")
                .size(14)
                .color(MUTED),
            button(text("All Projects →").size(14))
                .padding(0)
                .style(button::text)
                .on_press(Message::Navigate(Route::AllProjects)),
        ]
        .spacing(12)
        .width(Length::FillPortion(2)),
        column![text("Navigation").size(16), navigation]
            .spacing(14)
            .width(Length::FillPortion(1)),
        column![text("Services").size(16), services]
            .spacing(14)
            .width(Length::FillPortion(1)),
    ]
    .spacing(40);

    let bottom = row![
        text(format!("© {} Studio. All rights reserved. Made with ♥ by Creative Designer", year))
            .size(13)
            .color(MUTED),
        Space::with_width(Length::Fill),
        button(text("Back to top ↑").size(13))
            .style(button::text)
            .on_press(Message::NavSelected(Anchor::Home)),
    ]
    .align_y(Alignment::Center);

    container(style::centered(column![columns, horizontal_rule(1), bottom].spacing(32)))
        .padding([64, 0])
        .width(Length::Fill)
        .into()
}
