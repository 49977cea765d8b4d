//! Portfolio document model
//!
//! Mirrors the JSON document served at the data URL. Every field is optional
//! on the wire; absent values deserialize to empty defaults so a sparse
//! document still renders.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The whole portfolio document, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: ProjectGroups,
    pub featured: Option<FeaturedRef>,
}

impl PortfolioData {
    /// Resolve the featured reference against the project list
    ///
    /// Returns `None` when no reference is set, when the category is unknown,
    /// or when the id does not exist in that category.
    pub fn find_featured(&self) -> Option<&Project> {
        let featured = self.featured.as_ref()?;
        let category = Category::parse(&featured.category)?;
        self.projects
            .get(category)
            .iter()
            .find(|p| p.id == featured.id)
    }
}

/// Owner profile shown on the home and about pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub core_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_focus: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
}

/// A skill chip and the detail text shown when it is selected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Projects grouped by category, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectGroups {
    #[serde(deserialize_with = "null_as_default")]
    pub excel: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub sql: Vec<Project>,
}

impl ProjectGroups {
    pub fn get(&self, category: Category) -> &[Project] {
        match category {
            Category::Excel => &self.excel,
            Category::Sql => &self.sql,
        }
    }

    /// Total number of projects across all categories
    pub fn len(&self) -> usize {
        self.excel.len() + self.sql.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    pub preview_image: Option<String>,
    pub github_url: Option<String>,
    pub open_url: Option<String>,
}

impl Project {
    /// Preview image, if set to something other than whitespace
    pub fn preview(&self) -> Option<&str> {
        non_blank(self.preview_image.as_deref())
    }

    pub fn github(&self) -> Option<&str> {
        non_blank(self.github_url.as_deref())
    }

    pub fn open(&self) -> Option<&str> {
        non_blank(self.open_url.as_deref())
    }

    /// Highlights that are actually displayed
    pub fn shown_highlights(&self) -> &[String] {
        let end = self
            .highlights
            .len()
            .min(crate::constants::ui::MAX_HIGHLIGHTS);
        &self.highlights[..end]
    }
}

/// Treat empty and whitespace-only strings as absent
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Project column on the projects page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Excel,
    Sql,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Excel, Category::Sql];

    /// Parse a category key; unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "excel" => Some(Category::Excel),
            "sql" => Some(Category::Sql),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Excel => "excel",
            Category::Sql => "sql",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reference to the project highlighted on the home page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedRef {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

/// Visual mode, persisted as the literal `"dark"` or `"light"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a persisted value; anything unrecognized yields `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioData {
        serde_json::from_str(
            r#"{
                "profile": { "name": "Ada", "links": { "github": "https://github.com/ada" } },
                "skills": [{ "name": "SQL", "text": "Window functions" }],
                "projects": {
                    "excel": [{ "id": "a", "title": "Sales Model" }],
                    "sql": [{ "id": "a", "title": "Churn Query" }, { "id": "b", "title": "Cohorts" }]
                },
                "featured": { "category": "sql", "id": "b" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_featured_resolves_within_category() {
        let data = sample();
        let featured = data.find_featured().unwrap();
        assert_eq!(featured.title, "Cohorts");
    }

    #[test]
    fn test_find_featured_same_id_other_category() {
        let mut data = sample();
        data.featured = Some(FeaturedRef {
            category: "excel".into(),
            id: "a".into(),
        });
        assert_eq!(data.find_featured().unwrap().title, "Sales Model");
    }

    #[test]
    fn test_find_featured_not_found() {
        let mut data = sample();
        data.featured = Some(FeaturedRef {
            category: "excel".into(),
            id: "b".into(),
        });
        assert!(data.find_featured().is_none());

        data.featured = Some(FeaturedRef {
            category: "python".into(),
            id: "a".into(),
        });
        assert!(data.find_featured().is_none());

        data.featured = None;
        assert!(data.find_featured().is_none());
    }

    #[test]
    fn test_sparse_document_uses_defaults() {
        let data: PortfolioData = serde_json::from_str("{}").unwrap();
        assert!(data.projects.is_empty());
        assert!(data.skills.is_empty());
        assert_eq!(data.profile.name, "");
        assert!(data.featured.is_none());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let data: PortfolioData = serde_json::from_str(
            r#"{
                "profile": { "name": null, "coreSkills": null, "links": null },
                "skills": null,
                "projects": {
                    "excel": null,
                    "sql": [{ "id": "a", "title": "Churn", "subtitle": null, "tags": null, "highlights": null }]
                },
                "featured": null
            }"#,
        )
        .unwrap();
        assert_eq!(data.profile.name, "");
        assert!(data.profile.core_skills.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.projects.excel.is_empty());

        let churn = &data.projects.sql[0];
        assert_eq!(churn.title, "Churn");
        assert_eq!(churn.subtitle, "");
        assert!(churn.tags.is_empty());
        assert!(churn.highlights.is_empty());
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let data: PortfolioData =
            serde_json::from_str(r#"{ "projects": { "python": [{ "id": "x" }] } }"#).unwrap();
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let project = Project {
            preview_image: Some("   ".into()),
            github_url: Some("".into()),
            open_url: Some("https://example.com".into()),
            ..Default::default()
        };
        assert_eq!(project.preview(), None);
        assert_eq!(project.github(), None);
        assert_eq!(project.open(), Some("https://example.com"));
    }

    #[test]
    fn test_shown_highlights_caps_at_three() {
        let project = Project {
            highlights: vec!["x".into(), "y".into(), "z".into(), "w".into()],
            ..Default::default()
        };
        assert_eq!(project.shown_highlights(), ["x", "y", "z"]);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Light"), None);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }
}
