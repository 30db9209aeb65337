//! Outbound resource links shown after results.

use serde::Serialize;

use super::LifeArea;

/// Resource link prefix used when none is configured.
pub const DEFAULT_RESOURCES_BASE_URL: &str = "/resources";

/// A link to a resource category for one life area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    pub area: LifeArea,
    pub title: String,
    pub url: String,
}

impl LifeArea {
    /// Builds the resource links for this area under `base_url`.
    ///
    /// `https://example.com/resources` + "Personal Finance"
    /// becomes `https://example.com/resources/personal-finance`.
    pub fn resource_links(&self, base_url: &str) -> Vec<ResourceLink> {
        let base = base_url.trim_end_matches('/');
        self.resource_categories()
            .iter()
            .map(|title| ResourceLink {
                area: *self,
                title: (*title).to_string(),
                url: format!("{}/{}", base, slugify(title)),
            })
            .collect()
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
