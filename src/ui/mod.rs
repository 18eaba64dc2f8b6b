//! User interface module
//!
//! This module builds every view of the app:
//! - Navigation bar and compact menu (nav.rs)
//! - Landing page sections (home.rs, hero.rs, sections.rs, contact.rs)
//! - Filterable project grids (gallery.rs) and the all-projects page (projects.rs)
//! - The project lightbox (lightbox.rs)
//! - Anchor measurement and page scrolling (scroll.rs)
//! - Shared colors and container styles (style.rs)

use std::collections::HashMap;

use iced::widget::image;

use crate::state::data::ProjectId;

pub mod contact;
pub mod gallery;
pub mod hero;
pub mod home;
pub mod lightbox;
pub mod nav;
pub mod projects;
pub mod scroll;
pub mod sections;
pub mod style;

/// Loaded thumbnail handles by project
pub type Thumbnails = HashMap<ProjectId, image::Handle>;
