//! Project imagery
//!
//! This module handles:
//! - Fetching project images over HTTP
//! - Generating downscaled thumbnails
//! - Caching thumbnails to disk

pub mod thumbnail;
