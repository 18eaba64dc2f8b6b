//! State management module
//!
//! This module handles all application state, including:
//! - Static site content and project catalogs (catalog.rs, data.rs)
//! - Gallery filtering and the exit/enter transition (gallery.rs)
//! - The lightbox and page scroll lock (overlay.rs)
//! - Contact form validation and submission status (contact.rs)
//! - Testimonial slideshow index (slideshow.rs)
//! - Pages, anchors and deferred scrolling (nav.rs)

pub mod catalog;
pub mod contact;
pub mod data;
pub mod gallery;
pub mod nav;
pub mod overlay;
pub mod slideshow;
