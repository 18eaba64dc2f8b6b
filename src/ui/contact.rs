use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use super::style::{self, ACCENT, ERROR, MUTED, SUCCESS};
use crate::state::catalog::SiteContent;
use crate::state::contact::{ContactState, Field, FormStatus};
use crate::Message;

const FORM_WIDTH: f32 = 640.0;

pub fn view<'a>(content: &'a SiteContent, contact: &'a ContactState) -> Element<'a, Message> {
    let form: Element<'a, Message> = match contact.status() {
        FormStatus::Editing | FormStatus::Sending => form(contact),
        FormStatus::Sent => status_panel(
            "✔",
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you within 24 hours.",
            SUCCESS,
        ),
        FormStatus::Failed => status_panel(
            "⚠",
            "Something went wrong",
            "Your message could not be delivered. Please try again in a moment.",
            ERROR,
        ),
    };

    column![
        style::section_title(
            "Let's Work Together",
            "Have a project in mind? Let's create something amazing together",
        ),
        row![info(content), form].spacing(48),
    ]
    .spacing(56)
    .into()
}

fn form(contact: &ContactState) -> Element<'_, Message> {
    let editable = contact.status() == FormStatus::Editing;

    let fields = column(Field::ALL.into_iter().map(|field| {
        let placeholder = match field {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        };

        let mut input = text_input(placeholder, contact.form().value(field)).padding(14);
        if editable {
            input = input.on_input(move |value| Message::FieldEdited(field, value));
            if field == Field::Message {
                input = input.on_submit(Message::SubmitContact);
            }
        }

        let mut entry = column![text(field.label()).size(14), input].spacing(8);
        if let Some(error) = contact.errors().get(field) {
            entry = entry.push(text(error.to_string()).size(13).color(ERROR));
        }
        entry.into()
    }))
    .spacing(20);

    let label = if editable { "Send Message" } else { "Sending..." };
    let submit = button(container(text(label).size(17)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(16)
        .style(button::primary)
        .on_press_maybe(editable.then_some(Message::SubmitContact));

    container(column![fields, submit].spacing(28))
        .padding(32)
        .width(Length::Fixed(FORM_WIDTH))
        .style(style::card)
        .into()
}

fn status_panel<'a>(
    icon: &'a str,
    title: &'a str,
    body: &'a str,
    color: iced::Color,
) -> Element<'a, Message> {
    container(
        column![
            text(icon).size(56).color(color),
            text(title).size(26),
            text(body).size(16).color(MUTED),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fixed(FORM_WIDTH))
    .center_x(Length::Fixed(FORM_WIDTH))
    .style(style::card)
    .into()
}

fn info(content: &SiteContent) -> Element<'_, Message> {
    let details = column(content.contact.iter().map(|detail| {
        column![
            text(detail.label.as_str()).size(13).color(MUTED),
            text(detail.value.as_str()).size(17),
        ]
        .spacing(4)
        .into()
    }))
    .spacing(20);

    let socials = row(content.socials.iter().map(|social| {
        container(text(social.label.as_str()).size(14).color(ACCENT))
            .padding([8, 14])
            .style(style::card)
            .into()
    }))
    .spacing(10);

    let availability = container(
        column![
            text("● Currently Available").size(15).color(SUCCESS),
            text("I'm open to new projects and collaborations. Let's discuss how I can help.")
                .size(14)
                .color(MUTED),
        ]
        .spacing(8),
    )
    .padding(20)
    .style(style::card_active);

    column![
        text("Get in Touch").size(26),
        text("Whether you need a new brand identity, a website redesign or motion graphics, I'd love to hear about it.")
            .size(15)
            .color(MUTED),
        details,
        text("Follow Me").size(16),
        socials,
        Space::with_height(Length::Fixed(8.0)),
        availability,
    ]
    .spacing(20)
    .width(Length::Fill)
    .into()
}
