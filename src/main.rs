use chrono::Datelike;
use iced::widget::{column, container, image, opaque, scrollable, stack, Space};
use iced::{time, window, Element, Length, Size, Subscription, Task, Theme};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

mod config;
mod delivery;
mod error;
mod logging;
mod media;
mod state;
mod ui;

use config::AppConfig;
use delivery::{EmailJsDelivery, MessageDelivery};
use error::DeliveryError;
use state::catalog::SiteContent;
use state::contact::{ContactState, Field, SubmitError};
use state::data::{CategoryFilter, Project, ProjectId};
use state::gallery::{AnimationKind, AnimationRequest, Gallery};
use state::nav::{anchor_offset, Anchor, NavAction, Navigator, Route, SectionSpan};
use state::overlay::{Dismiss, Overlay, ScrollLock};
use state::slideshow::Slideshow;
use ui::hero::FloatingShape;
use ui::Thumbnails;

/// Which of the two project grids a message is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryId {
    /// Landing page portfolio section
    Featured,
    /// All-projects page
    Full,
}

/// Main application state
struct PortfolioStudio {
    config: AppConfig,
    content: SiteContent,
    featured: Gallery,
    full: Gallery,
    overlay: Overlay,
    nav: Navigator,
    contact: ContactState,
    slideshow: Slideshow,
    delivery: Arc<dyn MessageDelivery>,
    thumbnails: Thumbnails,
    window_width: f32,
    /// When the landing page last mounted, for the hero animation
    mounted_at: Instant,
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A nav link, CTA or footer link was selected
    NavSelected(Anchor),
    Navigate(Route),
    /// The page for a route has been built
    PageMounted(Route),
    /// The offset of an anchor inside the page, if it is on the page
    AnchorMeasured(Anchor, Option<f32>),
    PageScrolled(f32),
    /// Extents of the landing page sections after a scroll
    SectionsMeasured(Vec<SectionSpan>),
    ToggleMenu,
    WindowResized(Size),
    Frame(Instant),

    FilterSelected(GalleryId, CategoryFilter),
    AnimationFinished {
        gallery: GalleryId,
        kind: AnimationKind,
        generation: u64,
    },

    ProjectSelected(Arc<Project>),
    LightboxDismissed(Dismiss),

    SlideshowTick,
    SlideSelected(usize),
    SlidePrevious,
    SlideNext,

    FieldEdited(Field, String),
    SubmitContact,
    DeliveryFinished(u64, Result<(), DeliveryError>),
    StatusElapsed(u64),

    ThumbnailLoaded(ProjectId, Option<PathBuf>),
}

impl PortfolioStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let delivery: Arc<dyn MessageDelivery> =
            Arc::new(EmailJsDelivery::new(config.delivery.clone()));

        let app = Self::with_delivery(config, delivery);
        let thumbnails = load_thumbnails(&app.config, &app.content);

        (
            app,
            Task::batch([thumbnails, Task::done(Message::PageMounted(Route::Home))]),
        )
    }

    /// Build the state around a delivery backend, without starting any
    /// background work
    fn with_delivery(config: AppConfig, delivery: Arc<dyn MessageDelivery>) -> Self {
        // Content is compiled in; a parse failure is a build defect
        let content = SiteContent::embedded().expect("embedded site content is valid");

        let timing = config.animation.transition();
        let featured = Gallery::new(content.featured.clone(), timing);
        let full = Gallery::new(content.full.clone(), timing);

        // Shared by the lightbox and the compact menu
        let scroll_lock = ScrollLock::new();

        tracing::info!(
            "🎨 Portfolio initialized with {} featured and {} total projects",
            content.featured.len(),
            content.full.len()
        );

        let now = Instant::now();

        PortfolioStudio {
            overlay: Overlay::new(scroll_lock.clone()),
            nav: Navigator::new(scroll_lock),
            contact: ContactState::new(config.delivery.destination.clone()),
            slideshow: Slideshow::new(content.testimonials.len()),
            featured,
            full,
            delivery,
            thumbnails: Thumbnails::new(),
            window_width: f32::MAX,
            mounted_at: now,
            now,
            config,
            content,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavSelected(anchor) => match self.nav.select(anchor) {
                NavAction::ScrollTo(anchor) => measure_anchor(anchor),
                NavAction::Navigate(route) => self.route_changed(route),
            },
            Message::Navigate(route) => {
                if self.nav.navigate(route) {
                    self.route_changed(route)
                } else {
                    Task::none()
                }
            }
            Message::PageMounted(route) => {
                if route == Route::Home {
                    self.mounted_at = Instant::now();
                }
                match self.nav.page_mounted(route) {
                    Some(anchor) => measure_anchor(anchor),
                    None => Task::none(),
                }
            }
            Message::AnchorMeasured(anchor, offset) => {
                match offset {
                    Some(y) => self.nav.start_scroll(anchor_offset(y), Instant::now()),
                    None => tracing::debug!(anchor = anchor.key(), "anchor not on this page"),
                }
                Task::none()
            }
            Message::PageScrolled(y) => {
                self.nav.scrolled(y);
                if self.nav.route() == Route::Home {
                    ui::scroll::measure_sections().map(Message::SectionsMeasured)
                } else {
                    Task::none()
                }
            }
            Message::SectionsMeasured(spans) => {
                self.nav.track_sections(&spans);
                Task::none()
            }
            Message::ToggleMenu => {
                self.nav.toggle_menu();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                if !self.is_compact() {
                    self.nav.close_menu();
                }
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                match self.nav.scroll_frame(now) {
                    Some(y) => ui::scroll::scroll_page_to(y),
                    None => Task::none(),
                }
            }

            Message::FilterSelected(id, filter) => {
                let now = Instant::now();
                self.now = now;
                match self.gallery_mut(id).set_active_category(filter, now) {
                    Some(request) => play(id, request),
                    None => Task::none(),
                }
            }
            Message::AnimationFinished {
                gallery,
                kind,
                generation,
            } => {
                let now = Instant::now();
                self.now = now;
                match self.gallery_mut(gallery).animation_finished(kind, generation, now) {
                    Some(request) => play(gallery, request),
                    None => Task::none(),
                }
            }

            Message::ProjectSelected(project) => {
                tracing::debug!(project = project.id, "opening lightbox");
                self.overlay.open(project);
                Task::none()
            }
            Message::LightboxDismissed(how) => {
                self.overlay.dismiss(how);
                Task::none()
            }

            Message::SlideshowTick | Message::SlideNext => {
                self.slideshow.next();
                Task::none()
            }
            Message::SlidePrevious => {
                self.slideshow.previous();
                Task::none()
            }
            Message::SlideSelected(index) => {
                self.slideshow.go_to(index);
                Task::none()
            }

            Message::FieldEdited(field, value) => {
                self.contact.edit(field, value);
                Task::none()
            }
            Message::SubmitContact => match self.contact.submit() {
                Ok(submission) => Task::perform(
                    delivery::deliver(
                        Arc::clone(&self.delivery),
                        submission.ticket,
                        submission.message,
                    ),
                    |(ticket, result)| Message::DeliveryFinished(ticket, result),
                ),
                Err(SubmitError::Invalid(_)) => Task::none(),
                Err(err) => {
                    tracing::debug!("submit ignored: {:?}", err);
                    Task::none()
                }
            },
            Message::DeliveryFinished(ticket, result) => {
                match self.contact.delivered(ticket, &result) {
                    Some(ticket) => {
                        let display = self.config.delivery.status_display();
                        Task::perform(tokio::time::sleep(display), move |_| {
                            Message::StatusElapsed(ticket)
                        })
                    }
                    None => Task::none(),
                }
            }
            Message::StatusElapsed(ticket) => {
                self.contact.status_elapsed(ticket);
                Task::none()
            }

            Message::ThumbnailLoaded(id, path) => {
                if let Some(path) = path {
                    self.thumbnails.insert(id, image::Handle::from_path(path));
                }
                Task::none()
            }
        }
    }

    /// Common work after the route changed: close the lightbox, reset the
    /// scroll position and signal the mount once the new page is built
    fn route_changed(&mut self, route: Route) -> Task<Message> {
        tracing::debug!(?route, "route changed");
        self.overlay.dismiss(Dismiss::Navigation);
        Task::batch([
            ui::scroll::scroll_page_to(0.0),
            Task::done(Message::PageMounted(route)),
        ])
    }

    fn gallery_mut(&mut self, id: GalleryId) -> &mut Gallery {
        match id {
            GalleryId::Featured => &mut self.featured,
            GalleryId::Full => &mut self.full,
        }
    }

    fn is_compact(&self) -> bool {
        self.window_width < ui::nav::COMPACT_WIDTH
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.nav.route() {
            Route::Home => ui::home::view(ui::home::Landing {
                content: &self.content,
                featured: &self.featured,
                thumbnails: &self.thumbnails,
                slideshow: &self.slideshow,
                contact: &self.contact,
                hero: FloatingShape {
                    time: self.now.saturating_duration_since(self.mounted_at).as_secs_f32(),
                    speed: self.config.animation.hero_speed,
                },
                now: self.now,
                year: chrono::Local::now().year(),
            }),
            Route::AllProjects => ui::projects::view(&self.full, &self.thumbnails, self.now),
        };

        let scroll = scrollable(container(page).id(ui::scroll::page_content_id()))
            .id(ui::scroll::page_scroll_id())
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![
            container(scroll)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(ui::style::page),
        ];

        // While locked the page keeps its offset and input never reaches it
        if self.nav.is_page_locked() {
            layers = layers.push(opaque(Space::new(Length::Fill, Length::Fill)));
        }
        layers = layers.push(column![ui::nav::navbar(&self.nav, self.is_compact())]);

        if self.nav.is_menu_open() {
            layers = layers.push(ui::nav::menu(&self.nav));
        }
        if let Some(project) = self.overlay.project() {
            layers = layers.push(ui::lightbox::view(project, &self.thumbnails));
        }

        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions =
            vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        let on_home = self.nav.route() == Route::Home;
        if on_home && !self.slideshow.is_empty() {
            subscriptions.push(
                time::every(self.config.animation.slideshow_interval())
                    .map(|_| Message::SlideshowTick),
            );
        }

        let animating = self.featured.transition().is_animating()
            || self.full.transition().is_animating()
            || self.nav.is_scrolling();
        if on_home || animating {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Measure an anchor and report it back
fn measure_anchor(anchor: Anchor) -> Task<Message> {
    ui::scroll::measure(anchor).map(move |offset| Message::AnchorMeasured(anchor, offset))
}

/// Play one exit or enter animation; the completion message comes back
/// once its staggered total has elapsed
fn play(gallery: GalleryId, request: AnimationRequest) -> Task<Message> {
    Task::perform(tokio::time::sleep(request.total), move |_| {
        Message::AnimationFinished {
            gallery,
            kind: request.kind,
            generation: request.generation,
        }
    })
}

/// Start one background load per distinct project image
fn load_thumbnails(config: &AppConfig, content: &SiteContent) -> Task<Message> {
    if !config.media.thumbnails {
        return Task::none();
    }
    let Some(cache_dir) = media::thumbnail::get_thumbnail_cache_dir() else {
        tracing::warn!("⚠️  No cache directory; project images use placeholders");
        return Task::none();
    };
    if let Err(err) = std::fs::create_dir_all(&cache_dir) {
        tracing::warn!("⚠️  Could not create {}: {}", cache_dir.display(), err);
        return Task::none();
    }

    let images: BTreeMap<ProjectId, String> = content
        .full
        .projects()
        .iter()
        .chain(content.featured.projects())
        .map(|project| (project.id, project.image.clone()))
        .collect();

    let client = reqwest::Client::new();
    Task::batch(images.into_iter().map(|(id, url)| {
        Task::perform(
            media::thumbnail::load_thumbnail(client.clone(), cache_dir.clone(), id, url),
            move |result| match result {
                Ok(path) => Message::ThumbnailLoaded(id, Some(path)),
                Err(err) => {
                    tracing::debug!(project = id, "thumbnail unavailable: {}", err);
                    Message::ThumbnailLoaded(id, None)
                }
            },
        )
    }))
}

fn main() -> iced::Result {
    logging::init();

    iced::application(
        "Portfolio Studio",
        PortfolioStudio::update,
        PortfolioStudio::view,
    )
    .subscription(PortfolioStudio::subscription)
    .theme(PortfolioStudio::theme)
    .window_size(Size::new(1280.0, 860.0))
    .centered()
    .run_with(PortfolioStudio::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::tests::RecordingDelivery;
    use crate::state::contact::FormStatus;
    use crate::state::data::Category;
    use std::time::Duration;

    fn studio() -> (PortfolioStudio, Arc<RecordingDelivery>) {
        let recording = RecordingDelivery::new(Ok(()));
        let studio = PortfolioStudio::with_delivery(AppConfig::default(), recording.clone());
        (studio, recording)
    }

    fn first_project(studio: &PortfolioStudio) -> Arc<Project> {
        studio.content.featured.projects()[0].clone()
    }

    #[test]
    fn test_lightbox_locks_until_navigation() {
        let (mut studio, _) = studio();
        let project = first_project(&studio);

        let _ = studio.update(Message::ProjectSelected(project.clone()));
        assert_eq!(studio.overlay.project().map(|p| p.id), Some(project.id));
        assert!(studio.nav.is_page_locked());

        let _ = studio.update(Message::Navigate(Route::AllProjects));
        assert_eq!(studio.nav.route(), Route::AllProjects);
        assert!(studio.overlay.project().is_none());
        assert!(!studio.nav.is_page_locked());
    }

    #[test]
    fn test_close_button_releases_lock() {
        let (mut studio, _) = studio();
        let project = first_project(&studio);

        let _ = studio.update(Message::ProjectSelected(project));
        let _ = studio.update(Message::LightboxDismissed(Dismiss::CloseButton));
        assert!(studio.overlay.project().is_none());
        assert!(!studio.nav.is_page_locked());
    }

    #[test]
    fn test_frames_do_not_scroll_behind_lightbox() {
        let (mut studio, _) = studio();
        let project = first_project(&studio);

        let _ = studio.update(Message::AnchorMeasured(Anchor::Contact, Some(2400.0)));
        assert!(studio.nav.is_scrolling());

        let _ = studio.update(Message::ProjectSelected(project));
        let _ = studio.update(Message::Frame(Instant::now() + Duration::from_millis(16)));
        assert!(!studio.nav.is_scrolling());
    }

    #[tokio::test]
    async fn test_filters_are_independent_per_gallery() {
        let (mut studio, _) = studio();
        let branding = CategoryFilter::Only(Category::Branding);

        let _ = studio.update(Message::FilterSelected(GalleryId::Full, branding));
        assert_eq!(studio.full.active(), branding);
        assert_eq!(studio.featured.active(), CategoryFilter::All);
        assert!(studio.full.transition().is_animating());
        assert!(!studio.featured.transition().is_animating());
    }

    #[test]
    fn test_invalid_submit_never_reaches_delivery() {
        let (mut studio, recording) = studio();

        let _ = studio.update(Message::SubmitContact);
        assert_eq!(recording.calls(), 0);
        assert_eq!(studio.contact.status(), FormStatus::Editing);
        assert!(!studio.contact.errors().is_empty());
    }

    #[tokio::test]
    async fn test_delivered_submission_shows_status() {
        let (mut studio, _) = studio();
        let _ = studio.update(Message::FieldEdited(Field::Name, "Ada".into()));
        let _ = studio.update(Message::FieldEdited(Field::Email, "ada@example.com".into()));
        let _ = studio.update(Message::FieldEdited(Field::Subject, "Hello".into()));
        let _ = studio.update(Message::FieldEdited(
            Field::Message,
            "A message long enough".into(),
        ));

        let _ = studio.update(Message::SubmitContact);
        assert_eq!(studio.contact.status(), FormStatus::Sending);

        let _ = studio.update(Message::DeliveryFinished(1, Ok(())));
        assert_eq!(studio.contact.status(), FormStatus::Sent);
    }

    #[test]
    fn test_scroll_updates_active_link_on_home() {
        let (mut studio, _) = studio();
        let spans = vec![
            SectionSpan { anchor: Anchor::Home, top: 0.0, height: 800.0 },
            SectionSpan { anchor: Anchor::About, top: 800.0, height: 900.0 },
        ];

        let _ = studio.update(Message::PageScrolled(900.0));
        let _ = studio.update(Message::SectionsMeasured(spans));
        assert_eq!(studio.nav.active(), Anchor::About);
    }
}
