//! Navigation between pages and in-page anchors
//!
//! Selecting an anchor on the landing page scrolls straight to it. From any
//! other page the app first routes to the landing page and remembers the
//! anchor; the scroll happens when the landing page reports that it has
//! mounted, not after a fixed delay.

use std::time::{Duration, Instant};

use super::overlay::{ScrollGuard, ScrollLock};

/// Height of the fixed navigation bar that overlaps the page
pub const HEADER_OFFSET: f32 = 80.0;

/// Scroll distance after which the navbar switches to its elevated style
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// The active link follows the section under this point below the page top
pub const SPY_OFFSET: f32 = HEADER_OFFSET + 20.0;

const SMOOTH_SCROLL: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    AllProjects,
}

/// In-page anchors of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Testimonials,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Portfolio,
        Anchor::Testimonials,
        Anchor::Contact,
    ];

    /// Widget id of the section container
    pub fn key(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Portfolio => "portfolio",
            Anchor::Testimonials => "testimonials",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Services => "Services",
            Anchor::Portfolio => "Portfolio",
            Anchor::Testimonials => "Testimonials",
            Anchor::Contact => "Contact",
        }
    }
}

/// What the app has to do after a nav link was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Already on the landing page: scroll now
    ScrollTo(Anchor),
    /// Switch page; the anchor (if any) is scrolled to once it mounts
    Navigate(Route),
}

/// Vertical extent of one anchored section, measured from the top of the
/// scrolled content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub anchor: Anchor,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section under `y`, if any
pub fn section_at(spans: &[SectionSpan], y: f32) -> Option<Anchor> {
    spans.iter().find(|span| span.contains(y)).map(|span| span.anchor)
}

/// An eased scroll between two offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Offset at `now` (ease-out cubic)
    pub fn position(&self, now: Instant) -> f32 {
        let t = (now.saturating_duration_since(self.started).as_secs_f32()
            / SMOOTH_SCROLL.as_secs_f32())
        .clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SMOOTH_SCROLL
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

#[derive(Debug)]
pub struct Navigator {
    route: Route,
    active: Anchor,
    pending: Option<Anchor>,
    scroll_y: f32,
    scrolling: Option<SmoothScroll>,
    lock: ScrollLock,
    menu: Option<ScrollGuard>,
}

impl Navigator {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            route: Route::Home,
            active: Anchor::Home,
            pending: None,
            scroll_y: 0.0,
            scrolling: None,
            lock,
            menu: None,
        }
    }

    /// A nav link was selected
    pub fn select(&mut self, anchor: Anchor) -> NavAction {
        self.close_menu();
        self.active = anchor;

        match self.route {
            Route::Home => NavAction::ScrollTo(anchor),
            Route::AllProjects => {
                tracing::debug!(anchor = anchor.key(), "deferring scroll until home mounts");
                self.pending = Some(anchor);
                self.route = Route::Home;
                self.reset_scroll();
                NavAction::Navigate(Route::Home)
            }
        }
    }

    /// Switch page without an anchor. Returns false if already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        self.close_menu();
        if route == self.route {
            return false;
        }
        self.route = route;
        self.pending = None;
        self.active = Anchor::Home;
        self.reset_scroll();
        true
    }

    /// The page for `route` has been built; hand back the deferred anchor
    pub fn page_mounted(&mut self, route: Route) -> Option<Anchor> {
        if route != self.route {
            return None;
        }
        self.pending.take()
    }

    pub fn scrolled(&mut self, y: f32) {
        self.scroll_y = y;
    }

    /// Begin an eased scroll from the current offset
    pub fn start_scroll(&mut self, to: f32, now: Instant) {
        self.scrolling = Some(SmoothScroll::new(self.scroll_y, to.max(0.0), now));
    }

    /// Highlight the section under the current scroll offset.
    /// Leaves the highlight alone when no section is under it.
    pub fn track_sections(&mut self, spans: &[SectionSpan]) {
        if self.route != Route::Home {
            return;
        }
        if let Some(anchor) = section_at(spans, self.scroll_y + SPY_OFFSET) {
            self.active = anchor;
        }
    }

    /// Offset to apply for this frame, if a scroll is running.
    /// A held scroll lock cancels the scroll.
    pub fn scroll_frame(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.scrolling?;
        if self.lock.is_locked() {
            tracing::debug!("page scroll locked, cancelling smooth scroll");
            self.scrolling = None;
            return None;
        }
        if scroll.is_done(now) {
            self.scrolling = None;
            return Some(scroll.target());
        }
        Some(scroll.position(now))
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.is_some() {
            self.close_menu();
        } else {
            self.menu = Some(self.lock.acquire());
        }
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn active(&self) -> Anchor {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling.is_some()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn is_page_locked(&self) -> bool {
        self.lock.is_locked()
    }

    fn reset_scroll(&mut self) {
        self.scroll_y = 0.0;
        self.scrolling = None;
    }
}

/// Scroll offset that puts a section just below the fixed header.
/// `section_y` is measured from the top of the scrolled content.
pub fn anchor_offset(section_y: f32) -> f32 {
    (section_y - HEADER_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::eight_project_catalog;
    use crate::state::overlay::Overlay;

    fn spans() -> Vec<SectionSpan> {
        [
            (Anchor::Home, 0.0, 720.0),
            (Anchor::About, 720.0, 900.0),
            (Anchor::Services, 1620.0, 800.0),
        ]
        .into_iter()
        .map(|(anchor, top, height)| SectionSpan { anchor, top, height })
        .collect()
    }

    #[test]
    fn test_section_at_picks_containing_span() {
        let spans = spans();
        assert_eq!(section_at(&spans, 0.0), Some(Anchor::Home));
        assert_eq!(section_at(&spans, 719.9), Some(Anchor::Home));
        assert_eq!(section_at(&spans, 720.0), Some(Anchor::About));
        assert_eq!(section_at(&spans, 2419.0), Some(Anchor::Services));
        assert_eq!(section_at(&spans, 2420.0), None);
    }

    #[test]
    fn test_wheel_scrolling_moves_active_link() {
        let mut nav = Navigator::new(ScrollLock::new());

        // 100px below the page top lands in About
        nav.scrolled(620.0);
        nav.track_sections(&spans());
        assert_eq!(nav.active(), Anchor::About);

        nav.scrolled(1600.0);
        nav.track_sections(&spans());
        assert_eq!(nav.active(), Anchor::Services);

        // Past every section the last highlight stays
        nav.scrolled(5000.0);
        nav.track_sections(&spans());
        assert_eq!(nav.active(), Anchor::Services);
    }

    #[test]
    fn test_section_tracking_only_on_home() {
        let mut nav = Navigator::new(ScrollLock::new());
        nav.navigate(Route::AllProjects);
        nav.scrolled(1600.0);
        nav.track_sections(&spans());
        assert_eq!(nav.active(), Anchor::Home);
    }

    #[test]
    fn test_opening_overlay_mid_scroll_cancels_it() {
        let lock = ScrollLock::new();
        let mut nav = Navigator::new(lock.clone());
        let mut overlay = Overlay::new(lock.clone());
        let start = Instant::now();

        nav.start_scroll(900.0, start);
        assert!(nav.scroll_frame(start + Duration::from_millis(100)).is_some());

        overlay.open(eight_project_catalog().projects()[0].clone());
        assert!(nav.is_page_locked());
        assert_eq!(nav.scroll_frame(start + Duration::from_millis(300)), None);
        assert!(!nav.is_scrolling());

        // Closing the overlay does not resume the cancelled scroll
        overlay.close();
        assert_eq!(nav.scroll_frame(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn test_select_on_home_scrolls_immediately() {
        let mut nav = Navigator::new(ScrollLock::new());
        assert_eq!(nav.select(Anchor::Services), NavAction::ScrollTo(Anchor::Services));
        assert_eq!(nav.active(), Anchor::Services);
        assert_eq!(nav.page_mounted(Route::Home), None);
    }

    #[test]
    fn test_select_from_other_page_defers_until_mounted() {
        let mut nav = Navigator::new(ScrollLock::new());
        assert!(nav.navigate(Route::AllProjects));

        assert_eq!(nav.select(Anchor::Contact), NavAction::Navigate(Route::Home));
        assert_eq!(nav.route(), Route::Home);

        // A mount signal for some other page does not consume the anchor
        assert_eq!(nav.page_mounted(Route::AllProjects), None);
        assert_eq!(nav.page_mounted(Route::Home), Some(Anchor::Contact));
        assert_eq!(nav.page_mounted(Route::Home), None);
    }

    #[test]
    fn test_navigate_drops_pending_anchor() {
        let mut nav = Navigator::new(ScrollLock::new());
        nav.navigate(Route::AllProjects);
        nav.select(Anchor::About);
        nav.navigate(Route::AllProjects);
        assert_eq!(nav.page_mounted(Route::AllProjects), None);
        assert!(!nav.navigate(Route::AllProjects));
    }

    #[test]
    fn test_menu_holds_scroll_lock() {
        let lock = ScrollLock::new();
        let mut nav = Navigator::new(lock.clone());

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert!(lock.is_locked());

        // Picking a link closes the menu
        nav.select(Anchor::Portfolio);
        assert!(!nav.is_menu_open());
        assert!(!lock.is_locked());
        assert_eq!(lock.release_count(), 1);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = Navigator::new(ScrollLock::new());
        nav.scrolled(50.0);
        assert!(!nav.is_scrolled());
        nav.scrolled(51.0);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut nav = Navigator::new(ScrollLock::new());
        let start = Instant::now();
        nav.scrolled(100.0);
        nav.start_scroll(700.0, start);

        let mid = nav.scroll_frame(start + Duration::from_millis(300)).unwrap();
        assert!(mid > 100.0 && mid < 700.0);

        assert_eq!(nav.scroll_frame(start + SMOOTH_SCROLL), Some(700.0));
        assert!(!nav.is_scrolling());
        assert_eq!(nav.scroll_frame(start + SMOOTH_SCROLL), None);
    }

    #[test]
    fn test_anchor_offset_accounts_for_header() {
        assert_eq!(anchor_offset(500.0), 420.0);
        assert_eq!(anchor_offset(10.0), 0.0);
    }
}
