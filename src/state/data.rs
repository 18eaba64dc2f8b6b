//! Shared data structures for the application state
//!
//! These structs represent the static site content that flows from the
//! embedded catalog into the UI layer. Everything here is immutable once
//! loaded.

use serde::Deserialize;

/// Stable identifier of a project within a catalog
pub type ProjectId = u32;

/// Enumerated classification tag on a project
///
/// The set is closed: content with any other key fails to load with
/// `CatalogError::Malformed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Category {
    #[serde(rename = "branding")]
    Branding,
    #[serde(rename = "ui-ux")]
    UiUx,
    #[serde(rename = "motion")]
    Motion,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Branding,
        Category::UiUx,
        Category::Motion,
        Category::ThreeD,
    ];

    /// Short label used on filter buttons
    pub fn label(self) -> &'static str {
        match self {
            Category::Branding => "Branding",
            Category::UiUx => "UI/UX",
            Category::Motion => "Motion",
            Category::ThreeD => "3D Design",
        }
    }

    /// Long label used on the all-projects page and in the lightbox
    pub fn long_label(self) -> &'static str {
        match self {
            Category::Branding => "Branding",
            Category::UiUx => "UI/UX Design",
            Category::Motion => "Motion Graphics",
            Category::ThreeD => "3D Design",
        }
    }
}

/// Category selection for a gallery: every project, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order, "all" first
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Whether a project with `category` passes this filter
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Work",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Represents a single project in the portfolio
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    /// Unique within its catalog
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    /// Remote image URL (availability not guaranteed)
    pub image: String,
    pub description: String,
    pub client: String,
    pub year: String,
}

/// A client review shown in the testimonials slideshow
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub content: String,
    /// Star rating, 1 to 5
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage (0-100)
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// A line of contact details; `href` is absent for non-clickable entries
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactDetail {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}
