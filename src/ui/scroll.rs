//! Locating anchors inside the scrolling page
//!
//! `container::visible_bounds` clips to the viewport, so a section that is
//! off screen reports nothing. This operation reads the unclipped layout
//! bounds instead and returns the section's offset from the top of the
//! scrolled content.

use iced::advanced::widget::{self, operation::Outcome, Operation};
use iced::widget::{container, scrollable};
use iced::{Rectangle, Task};

use crate::state::nav::{Anchor, SectionSpan};

/// The page scrollable
pub const PAGE_SCROLL: &str = "page-scroll";
/// The column directly inside the page scrollable
pub const PAGE_CONTENT: &str = "page-content";

pub fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new(PAGE_SCROLL)
}

pub fn page_content_id() -> container::Id {
    container::Id::new(PAGE_CONTENT)
}

pub fn anchor_id(anchor: Anchor) -> container::Id {
    container::Id::new(anchor.key())
}

/// Offset of `anchor` from the top of the page content, `None` if the
/// anchor is not part of the current page
pub fn measure(anchor: Anchor) -> Task<Option<f32>> {
    widget::operate(SectionOffset {
        page: widget::Id::new(PAGE_CONTENT),
        target: widget::Id::new(anchor.key()),
        page_y: None,
        target_y: None,
    })
}

/// Extent of every anchored section on the current page, in page order
pub fn measure_sections() -> Task<Vec<SectionSpan>> {
    widget::operate(SectionSpans {
        page: widget::Id::new(PAGE_CONTENT),
        anchors: Anchor::ALL
            .into_iter()
            .map(|anchor| (widget::Id::new(anchor.key()), anchor))
            .collect(),
        page_y: None,
        found: Vec::new(),
    })
}

/// Jump the page to an absolute offset
pub fn scroll_page_to<T>(y: f32) -> Task<T>
where
    T: Send + 'static,
{
    scrollable::scroll_to(page_scroll_id(), scrollable::AbsoluteOffset { x: 0.0, y })
}

struct SectionOffset {
    page: widget::Id,
    target: widget::Id,
    page_y: Option<f32>,
    target_y: Option<f32>,
}

impl Operation<Option<f32>> for SectionOffset {
    fn container(
        &mut self,
        id: Option<&widget::Id>,
        bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<Option<f32>>),
    ) {
        if let Some(id) = id {
            if *id == self.page {
                self.page_y = Some(bounds.y);
            } else if *id == self.target {
                self.target_y = Some(bounds.y);
            }
        }

        operate_on_children(self);
    }

    fn finish(&self) -> Outcome<Option<f32>> {
        match (self.page_y, self.target_y) {
            (Some(page), Some(target)) => Outcome::Some(Some(target - page)),
            _ => Outcome::Some(None),
        }
    }
}

struct SectionSpans {
    page: widget::Id,
    anchors: Vec<(widget::Id, Anchor)>,
    page_y: Option<f32>,
    found: Vec<(Anchor, Rectangle)>,
}

impl Operation<Vec<SectionSpan>> for SectionSpans {
    fn container(
        &mut self,
        id: Option<&widget::Id>,
        bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<Vec<SectionSpan>>),
    ) {
        if let Some(id) = id {
            if *id == self.page {
                self.page_y = Some(bounds.y);
            } else if let Some((_, anchor)) = self.anchors.iter().find(|(key, _)| key == id) {
                self.found.push((*anchor, bounds));
            }
        }

        operate_on_children(self);
    }

    fn finish(&self) -> Outcome<Vec<SectionSpan>> {
        let Some(page_y) = self.page_y else {
            return Outcome::Some(Vec::new());
        };
        Outcome::Some(
            self.found
                .iter()
                .map(|(anchor, bounds)| SectionSpan {
                    anchor: *anchor,
                    top: bounds.y - page_y,
                    height: bounds.height,
                })
                .collect(),
        )
    }
}
