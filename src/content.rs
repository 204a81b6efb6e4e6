use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, ProjectRecord};

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    load_catalog().unwrap_or_else(|e| {
        log::error!("{e}");
        Catalog::default()
    })
});
pub static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    read_json("testimonials.json").unwrap_or_else(|e| {
        log::error!("{e}");
        vec![]
    })
});
pub static SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| {
    read_json("skills.json").unwrap_or_else(|e| {
        log::error!("{e}");
        vec![]
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
    #[error("Invalid project catalog: {0}")]
    Catalog(#[from] CatalogError),
}

fn read_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

pub fn load_catalog() -> Result<Catalog, ContentError> {
    let records: Vec<ProjectRecord> = read_json("projects.json")?;
    Ok(Catalog::new(records)?)
}

/// Fixed palette for tiles and chips. Each token maps to literal class strings so the
/// stylesheet build can see every class that is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Purple,
    Yellow,
    Pink,
    Orange,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-600 dark:text-blue-400",
            Accent::Green => "text-green-600 dark:text-green-400",
            Accent::Purple => "text-purple-600 dark:text-purple-400",
            Accent::Yellow => "text-yellow-600 dark:text-yellow-400",
            Accent::Pink => "text-pink-600 dark:text-pink-400",
            Accent::Orange => "text-orange-600 dark:text-orange-400",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300",
            Accent::Green => "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300",
            Accent::Purple => {
                "bg-purple-100 text-purple-700 dark:bg-purple-900/30 dark:text-purple-300"
            }
            Accent::Yellow => {
                "bg-yellow-100 text-yellow-700 dark:bg-yellow-900/30 dark:text-yellow-300"
            }
            Accent::Pink => "bg-pink-100 text-pink-700 dark:bg-pink-900/30 dark:text-pink-300",
            Accent::Orange => {
                "bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-300"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub rating: u8,
    pub project: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Rating clamped to the 1..=5 stars the page can draw.
    pub fn stars(&self) -> usize {
        self.rating.clamp(1, 5) as usize
    }
}

pub fn average_rating(testimonials: &[Testimonial]) -> Option<f32> {
    if testimonials.is_empty() {
        return None;
    }
    let sum: u32 = testimonials.iter().map(|t| t.stars() as u32).sum();
    Some(sum as f32 / testimonials.len() as f32)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub accent: Accent,
    pub items: Vec<String>,
}
