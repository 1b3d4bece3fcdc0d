use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Project category shown as a gallery tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Selection applied to the gallery.
///
/// Keys that are neither `all` nor a known category are kept as
/// `Unknown` and select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
            CategoryFilter::Unknown(key) => key,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "all" => CategoryFilter::All,
            "web" => CategoryFilter::Only(Category::Web),
            "mobile" => CategoryFilter::Only(Category::Mobile),
            other => CategoryFilter::Unknown(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

/// Tab key and label, in display order.
pub const TABS: [(CategoryFilter, &str); 3] = [
    (CategoryFilter::All, "All Projects"),
    (CategoryFilter::Only(Category::Web), "Web Design"),
    (CategoryFilter::Only(Category::Mobile), "Mobile Apps"),
];

pub const MORE_WORK_URL: &str = "https://dribbble.com";

static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Finance App Redesign",
        category: Category::Mobile,
        image: "https://img.heroui.chat/image/finance?w=600&h=400&u=1",
        description: "A complete redesign of a financial management application with improved user experience and visual appeal.",
        tags: &["UI Design", "UX Research", "Mobile App"],
        link: "#",
    },
    Project {
        id: 2,
        title: "E-commerce Website",
        category: Category::Web,
        image: "https://img.heroui.chat/image/dashboard?w=600&h=400&u=2",
        description: "A modern e-commerce platform with intuitive navigation and seamless checkout process.",
        tags: &["Web Design", "UI/UX", "E-commerce"],
        link: "#",
    },
    Project {
        id: 3,
        title: "Health Tracking Dashboard",
        category: Category::Web,
        image: "https://img.heroui.chat/image/dashboard?w=600&h=400&u=3",
        description: "A comprehensive health monitoring dashboard that visualizes user health data in an intuitive way.",
        tags: &["Dashboard", "Data Visualization", "Healthcare"],
        link: "#",
    },
    Project {
        id: 4,
        title: "Travel Companion App",
        category: Category::Mobile,
        image: "https://img.heroui.chat/image/places?w=600&h=400&u=4",
        description: "A travel app that helps users discover, plan, and navigate their journeys with personalized recommendations.",
        tags: &["Mobile App", "UI Design", "Travel"],
        link: "#",
    },
    Project {
        id: 5,
        title: "Smart Home Control System",
        category: Category::Web,
        image: "https://img.heroui.chat/image/dashboard?w=600&h=400&u=5",
        description: "An intuitive interface for controlling smart home devices with customizable dashboards.",
        tags: &["IoT", "Dashboard", "Smart Home"],
        link: "#",
    },
    Project {
        id: 6,
        title: "Social Media Platform",
        category: Category::Web,
        image: "https://img.heroui.chat/image/dashboard?w=600&h=400&u=6",
        description: "A modern social platform focused on community building and content sharing.",
        tags: &["Social Media", "Web App", "Community"],
        link: "#",
    },
];

/// Read-only view over a fixed list of projects.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCatalog {
    projects: &'static [Project],
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProjectCatalog {
    /// The projects shipped with the site.
    pub fn builtin() -> Self {
        Self {
            projects: &PROJECTS,
        }
    }

    /// Gallery tabs with their labels, in display order.
    pub fn tabs(&self) -> [(CategoryFilter, &'static str); 3] {
        TABS
    }

    pub fn all(&self) -> &'static [Project] {
        self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Filter by tab key. `"all"` keeps everything, unknown keys keep nothing.
    pub fn filter(&self, key: &str) -> Vec<&'static Project> {
        let filter = key.parse::<CategoryFilter>().unwrap_or_default();
        self.filter_by(&filter)
    }

    /// Projects matching `filter`, in definition order.
    pub fn filter_by(&self, filter: &CategoryFilter) -> Vec<&'static Project> {
        let projects: &'static [Project] = self.projects;
        projects
            .iter()
            .filter(|project| filter.matches(project))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let catalog = ProjectCatalog::builtin();
        let mut ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_filter_key_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "mobile".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Mobile)
        );
        assert_eq!(
            "Web".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Unknown("Web".to_string())
        );
    }

    #[test]
    fn test_tab_keys_round_trip() {
        for (filter, _label) in TABS.iter() {
            assert_eq!(&filter.key().parse::<CategoryFilter>().unwrap(), filter);
        }
    }
}
