use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::data::{
    Category, ContactDetail, Project, Service, Skill, SocialLink, Stat, Testimonial,
};
use crate::error::CatalogError;

/// Site content compiled into the binary
const SITE_JSON: &str = include_str!("../../assets/site.json");

/// A static, read-only collection of projects.
///
/// Projects are shared as `Arc<Project>` so the gallery and the lightbox
/// read through to the same record instead of holding copies.
/// The order is the insertion order of the source content.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Arc<[Arc<Project>]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }

        Ok(Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        })
    }

    /// All projects in insertion order
    pub fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Projects grouped per category, in category display order.
    /// Categories without projects are omitted.
    pub fn grouped(&self) -> Vec<(Category, Vec<Arc<Project>>)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let members: Vec<_> = self
                    .projects
                    .iter()
                    .filter(|project| project.category == category)
                    .cloned()
                    .collect();
                (!members.is_empty()).then_some((category, members))
            })
            .collect()
    }
}

/// Raw shape of the embedded content file
#[derive(Debug, Deserialize)]
struct SiteFile {
    featured: Vec<Project>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    brands: Vec<String>,
    services: Vec<Service>,
    skills: Vec<Skill>,
    stats: Vec<Stat>,
    contact: Vec<ContactDetail>,
    socials: Vec<SocialLink>,
}

/// Everything the pages render, loaded once at startup
#[derive(Debug, Clone)]
pub struct SiteContent {
    /// Highlighted work shown in the landing portfolio section
    pub featured: Catalog,
    /// Complete portfolio for the all-projects page
    pub full: Catalog,
    pub testimonials: Vec<Testimonial>,
    pub brands: Vec<String>,
    pub services: Vec<Service>,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    pub contact: Vec<ContactDetail>,
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    /// Parse the content compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let site: SiteFile = serde_json::from_str(json)?;

        Ok(Self {
            featured: Catalog::new(site.featured)?,
            full: Catalog::new(site.projects)?,
            testimonials: site.testimonials,
            brands: site.brands,
            services: site.services,
            skills: site.skills,
            stats: site.stats,
            contact: site.contact,
            socials: site.socials,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: u32, category: Category) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            category,
            image: format!("https://example.com/{}.jpg", id),
            description: String::new(),
            client: String::from("Client"),
            year: String::from("2024"),
        }
    }

    /// 8 projects, 2 per category, interleaved like the landing section
    pub(crate) fn eight_project_catalog() -> Catalog {
        let projects = (1..=8)
            .map(|id| project(id, Category::ALL[((id - 1) % 4) as usize]))
            .collect();
        Catalog::new(projects).unwrap()
    }

    #[test]
    fn test_embedded_content_loads() {
        let site = SiteContent::embedded().unwrap();
        assert_eq!(site.featured.len(), 8);
        assert_eq!(site.full.len(), 24);
        assert_eq!(site.testimonials.len(), 5);
        assert_eq!(site.services.len(), 6);
    }

    #[test]
    fn test_featured_has_two_per_category() {
        let site = SiteContent::embedded().unwrap();
        for (_, members) in site.featured.grouped() {
            assert_eq!(members.len(), 2);
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let projects = vec![project(1, Category::Branding), project(1, Category::Motion)];
        assert!(matches!(
            Catalog::new(projects),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_unknown_category_fails_the_load() {
        let json = SITE_JSON.replacen("\"branding\"", "\"photography\"", 1);
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_grouped_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            project(9, Category::Branding),
            project(2, Category::UiUx),
            project(1, Category::Branding),
        ])
        .unwrap();

        let grouped = catalog.grouped();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Category::Branding);
        let ids: Vec<_> = grouped[0].1.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 1]);
    }
}
