//! Static game content
//!
//! Items, categories and the informational text shown alongside the game.
//! Content is data, not behavior: the state machine only ever reads it.

mod builtin;

pub use builtin::builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Categories beyond this cannot be reached from the digit keys
pub const MAX_CATEGORIES: usize = 9;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Content defines no categories")]
    NoCategories,
    #[error("Content defines no items")]
    NoItems,
    #[error("Content defines {0} categories, at most {max} are supported", max = MAX_CATEGORIES)]
    TooManyCategories(usize),
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),
    #[error("Item {item} refers to unknown category {category}")]
    UnknownCategory { item: String, category: String },
}

/// One of the bins an item can be sorted into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Definition of a sortable item with its true category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub content: String,
    pub category: String,
}

impl ItemDef {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

/// A labelled paragraph of the info sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoPoint {
    pub label: String,
    pub text: String,
}

/// Background reading offered once the game has been scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSheet {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub points: Vec<InfoPoint>,
    #[serde(default)]
    pub closing: String,
}

/// Everything the game needs to know about what is being sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_instructions")]
    pub instructions: String,
    #[serde(default = "default_pool_heading")]
    pub pool_heading: String,
    pub categories: Vec<Category>,
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub info: Option<InfoSheet>,
}

fn default_title() -> String {
    "Sorting Game".to_string()
}

fn default_instructions() -> String {
    "Sort each item into the correct category.".to_string()
}

fn default_pool_heading() -> String {
    "Available Items".to_string()
}

impl Content {
    /// Parse and validate content from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON content file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the reference and uniqueness rules the state machine relies on
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.categories.is_empty() {
            return Err(ContentError::NoCategories);
        }
        if self.categories.len() > MAX_CATEGORIES {
            return Err(ContentError::TooManyCategories(self.categories.len()));
        }
        if self.items.is_empty() {
            return Err(ContentError::NoItems);
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateItem(item.id.clone()));
            }
            if !category_ids.contains(item.category.as_str()) {
                return Err(ContentError::UnknownCategory {
                    item: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    /// Category shown at the given zero-based column
    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }
}
