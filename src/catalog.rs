use std::{collections::HashSet, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Label of the synthetic category that admits every project.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Live,
    #[serde(rename = "In Development")]
    InDevelopment,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::InDevelopment => "In Development",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech: Vec<String>,
    pub status: Status,
    #[serde(default, deserialize_with = "optional_link")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "optional_link", alias = "repositoryLink")]
    pub repository: Option<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub emoji: String,
}

// "#" was the placeholder for a missing link; treat it like an absent one.
fn optional_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let link = Option::<String>::deserialize(deserializer)?;
    Ok(link.filter(|l| {
        let l = l.trim();
        !l.is_empty() && l != "#"
    }))
}

impl ProjectRecord {
    /// `needle` must already be lower-cased.
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tech.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// The category selection on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn admits(&self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projects matching both the category and the free-text query, in catalog order.
///
/// The query is matched case-insensitively against the title, the description and each
/// technology name. An empty query matches everything.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| category.admits(p))
        .filter(|p| needle.is_empty() || p.mentions(&needle))
        .collect()
}

/// Distinct categories in order of first appearance.
pub fn categories(catalog: &[ProjectRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    total: usize,
    per_category: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, category: &CategoryFilter) -> usize {
        match category {
            CategoryFilter::All => self.total,
            CategoryFilter::Only(name) => self
                .per_category
                .iter()
                .find(|(c, _)| c == name)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        }
    }

    /// "All" first, then each category in order of first appearance.
    pub fn entries(&self) -> Vec<(CategoryFilter, usize)> {
        std::iter::once((CategoryFilter::All, self.total))
            .chain(
                self.per_category
                    .iter()
                    .map(|(c, n)| (CategoryFilter::Only(c.clone()), *n)),
            )
            .collect()
    }
}

pub fn category_counts(catalog: &[ProjectRecord]) -> CategoryCounts {
    let per_category = categories(catalog)
        .into_iter()
        .map(|c| {
            let n = catalog.iter().filter(|p| p.category == c).count();
            (c, n)
        })
        .collect();
    CategoryCounts {
        total: catalog.len(),
        per_category,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate project title: {0}")]
    DuplicateTitle(String),
    #[error("Project {0} uses the reserved category \"All\"")]
    ReservedCategory(String),
}

/// An immutable list of projects with unique titles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut titles = HashSet::new();
        for record in &records {
            if record.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory(record.title.clone()));
            }
            if !titles.insert(record.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(record.title.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, title: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|p| p.title == title)
    }

    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&ProjectRecord> {
        filter_projects(&self.records, category, query)
    }

    pub fn counts(&self) -> CategoryCounts {
        category_counts(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(title: &str, category: &str, tech: &[&str]) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: format!("{title} description"),
            category: category.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            status: Status::Live,
            link: None,
            repository: None,
            features: vec![],
            emoji: String::new(),
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            project("Soma Analytics", "Full Stack", &["Next.js", "TypeScript"]),
            project("Styles N Tunes", "Frontend", &["React", "Tailwind CSS"]),
            project("GreenLeaf", "Full Stack", &["Node.js", "MongoDB"]),
            project("FinTech App", "Mobile Development", &["React Native"]),
        ]
    }

    fn titles(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        let catalog = sample();
        let res = filter_projects(&catalog, &CategoryFilter::All, "");
        assert_eq!(res.len(), catalog.len());
        assert!(res.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample();
        let res = filter_projects(&catalog, &"Full Stack".into(), "");
        assert_eq!(titles(&res), vec!["Soma Analytics", "GreenLeaf"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = sample();
        let res = filter_projects(&catalog, &"Embedded".into(), "");
        assert!(res.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let catalog = sample();
        // title
        let res = filter_projects(&catalog, &CategoryFilter::All, "soma");
        assert_eq!(titles(&res), vec!["Soma Analytics"]);
        // tech
        let res = filter_projects(&catalog, &CategoryFilter::All, "REACT");
        assert_eq!(titles(&res), vec!["Styles N Tunes", "FinTech App"]);
        // description
        let res = filter_projects(&catalog, &CategoryFilter::All, "greenleaf DESC");
        assert_eq!(titles(&res), vec!["GreenLeaf"]);
    }

    #[test]
    fn test_search_combines_with_category() {
        let catalog = sample();
        let res = filter_projects(&catalog, &"Mobile Development".into(), "react");
        assert_eq!(titles(&res), vec!["FinTech App"]);
        let res = filter_projects(&catalog, &"Frontend".into(), "mongo");
        assert!(res.is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = sample();
        let res = filter_projects(&catalog, &CategoryFilter::All, " react ");
        assert!(res.is_empty());
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&sample());
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(&CategoryFilter::All), 4);
        assert_eq!(counts.get(&"Full Stack".into()), 2);
        assert_eq!(counts.get(&"Frontend".into()), 1);
        assert_eq!(counts.get(&"Nope".into()), 0);
        let labels: Vec<String> = counts
            .entries()
            .iter()
            .map(|(c, _)| c.to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["All", "Full Stack", "Frontend", "Mobile Development"]
        );
    }

    #[test]
    fn test_empty_catalog_counts() {
        let counts = category_counts(&[]);
        assert_eq!(counts.entries(), vec![(CategoryFilter::All, 0)]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_titles() {
        let mut records = sample();
        records.push(project("GreenLeaf", "Frontend", &[]));
        assert_eq!(
            Catalog::new(records),
            Err(CatalogError::DuplicateTitle("GreenLeaf".to_string()))
        );
    }

    #[test]
    fn test_catalog_rejects_reserved_category() {
        let records = vec![project("Everything", "All", &[])];
        assert!(matches!(
            Catalog::new(records),
            Err(CatalogError::ReservedCategory(_))
        ));
    }

    #[test]
    fn test_catalog_lookup_by_title() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(
            catalog.get("FinTech App").map(|p| p.category.as_str()),
            Some("Mobile Development")
        );
        assert!(catalog.get("fintech app").is_none());
    }

    #[test]
    fn test_placeholder_links_deserialize_as_absent() {
        let json = r##"{
            "title": "Ashen Bites",
            "description": "Street food",
            "category": "Fullstack",
            "tech": ["Next.js"],
            "status": "In Development",
            "link": "#",
            "repositoryLink": "https://github.com/example/ashen",
            "features": []
        }"##;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, Status::InDevelopment);
        assert_eq!(record.link, None);
        assert_eq!(
            record.repository.as_deref(),
            Some("https://github.com/example/ashen")
        );
    }

    const CATEGORIES: [&str; 3] = ["Full Stack", "Frontend", "Mobile Development"];
    const TECH: [&str; 5] = ["React", "Rust", "Go", "TypeScript", "Node.js"];

    fn arb_catalog() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec(
            (
                "[a-zA-Z ]{1,12}",
                "[a-zA-Z ]{0,24}",
                0..CATEGORIES.len(),
                prop::collection::vec(0..TECH.len(), 0..4),
            ),
            0..12,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, description, c, tech))| ProjectRecord {
                    title: format!("{i} {title}"),
                    description,
                    category: CATEGORIES[c].to_string(),
                    tech: tech.into_iter().map(|t| TECH[t].to_string()).collect(),
                    status: Status::Live,
                    link: None,
                    repository: None,
                    features: vec![],
                    emoji: String::new(),
                })
                .collect()
        })
    }

    fn contains_ci(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    proptest! {
        #[test]
        fn category_filter_agrees_with_counts(catalog in arb_catalog(), c in 0..CATEGORIES.len()) {
            let category = CategoryFilter::from(CATEGORIES[c]);
            let res = filter_projects(&catalog, &category, "");
            prop_assert!(res.iter().all(|p| p.category == CATEGORIES[c]));
            prop_assert_eq!(res.len(), category_counts(&catalog).get(&category));
        }

        #[test]
        fn search_partitions_catalog(catalog in arb_catalog(), q in "[a-zA-Z.]{0,3}") {
            let res = filter_projects(&catalog, &CategoryFilter::All, &q);
            for p in &catalog {
                let hit = contains_ci(&p.title, &q)
                    || contains_ci(&p.description, &q)
                    || p.tech.iter().any(|t| contains_ci(t, &q));
                prop_assert_eq!(hit, res.iter().any(|r| r.title == p.title));
            }
        }

        #[test]
        fn filter_is_idempotent_and_order_stable(catalog in arb_catalog(), q in "[a-z]{0,2}") {
            let first = filter_projects(&catalog, &CategoryFilter::All, &q);
            let second = filter_projects(&catalog, &CategoryFilter::All, &q);
            prop_assert_eq!(&first, &second);
            let positions: Vec<usize> = first
                .iter()
                .filter_map(|r| catalog.iter().position(|p| p.title == r.title))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
