//! Catalog data providers.
//!
//! The storefront depends only on [`CatalogProvider`]; the built-in sample
//! list and JSON files are two implementations of it. Every provider runs
//! its records through [`validate_items`] so malformed data is rejected at
//! load time instead of leaking into sorting.

use super::{CatalogError, Category, Format, Item};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of catalog items.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short name for logs (e.g. "sample", "file")
    fn source_name(&self) -> &str;

    /// Load the complete item list.
    async fn list_items(&self) -> Result<Vec<Item>, CatalogError>;
}

/// Item record as stored in catalog files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub published_date: String,
    #[serde(default)]
    pub pages: u32,
    pub format: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ItemRecord {
    /// Convert into a validated [`Item`].
    pub fn into_item(self) -> Result<Item, CatalogError> {
        let published = NaiveDate::parse_from_str(&self.published_date, DATE_FORMAT).map_err(|_| {
            CatalogError::InvalidDate {
                id: self.id.clone(),
                value: self.published_date.clone(),
            }
        })?;
        let category: Category = self.category.parse()?;
        let format: Format = self.format.parse()?;

        Ok(Item {
            id: self.id,
            title: self.title,
            author: self.author,
            price: self.price,
            original_price: self.original_price,
            rating: self.rating,
            review_count: self.review_count,
            description: self.description,
            category,
            published,
            pages: self.pages,
            format,
            cover_url: self.cover_url,
            preview_url: self.preview_url,
            featured: self.featured,
            bestseller: self.bestseller,
            tags: self.tags,
        })
    }
}

/// Check the invariants sorting and filtering rely on.
pub fn validate_items(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.is_empty() {
            return Err(CatalogError::InvalidItem {
                id: item.title.clone(),
                reason: "id cannot be empty".to_string(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(CatalogError::InvalidItem {
                id: item.id.clone(),
                reason: format!("price must be a non-negative number, got {}", item.price),
            });
        }
        if !(0.0..=5.0).contains(&item.rating) {
            return Err(CatalogError::InvalidItem {
                id: item.id.clone(),
                reason: format!("rating must be between 0 and 5, got {}", item.rating),
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of item records.
pub fn parse_catalog_json(content: &str) -> Result<Vec<Item>, CatalogError> {
    let records: Vec<ItemRecord> = serde_json::from_str(content)?;
    let items = records
        .into_iter()
        .map(ItemRecord::into_item)
        .collect::<Result<Vec<_>, _>>()?;
    validate_items(&items)?;
    Ok(items)
}

/// Reads the catalog from a JSON file on every call.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    fn source_name(&self) -> &str {
        "file"
    }

    async fn list_items(&self) -> Result<Vec<Item>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let items = parse_catalog_json(&content)?;
        log::info!("Loaded {} catalog items from {}", items.len(), self.path.display());
        Ok(items)
    }
}

/// The built-in six-book sample catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    /// Records in file form, so the sample goes through the same validation as files
    fn records() -> Vec<ItemRecord> {
        #[allow(clippy::too_many_arguments)]
        fn record(
            id: &str,
            title: &str,
            author: &str,
            price: f64,
            rating: f64,
            review_count: u32,
            description: &str,
            category: &str,
            published_date: &str,
            pages: u32,
            format: &str,
            tags: &[&str],
        ) -> ItemRecord {
            ItemRecord {
                id: id.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                price,
                original_price: None,
                rating,
                review_count,
                description: description.to_string(),
                category: category.to_string(),
                published_date: published_date.to_string(),
                pages,
                format: format.to_string(),
                cover_url: format!("https://via.placeholder.com/200x300?text={}", title.replace(' ', "+")),
                preview_url: None,
                featured: false,
                bestseller: false,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }

        let mut bitcoin_standard = record(
            "1",
            "The Bitcoin Standard",
            "Saifedean Ammous",
            24.99,
            4.5,
            1247,
            "The definitive book on Bitcoin and its revolutionary impact on monetary systems.",
            "economics",
            "2018-03-23",
            304,
            "ebook",
            &["bitcoin", "economics", "monetary-theory", "cryptocurrency"],
        );
        bitcoin_standard.original_price = Some(29.99);
        bitcoin_standard.featured = true;
        bitcoin_standard.bestseller = true;

        let mut mastering = record(
            "2",
            "Mastering Bitcoin",
            "Andreas Antonopoulos",
            39.99,
            4.7,
            892,
            "A comprehensive technical guide to Bitcoin and blockchain technology.",
            "technical",
            "2017-07-15",
            415,
            "ebook",
            &["bitcoin", "technical", "blockchain", "programming"],
        );
        mastering.featured = true;

        let programming = record(
            "3",
            "Programming Bitcoin",
            "Jimmy Song",
            34.99,
            4.3,
            523,
            "Learn how to program Bitcoin from scratch using Python.",
            "technical",
            "2019-02-08",
            322,
            "ebook",
            &["bitcoin", "programming", "python", "technical"],
        );

        let internet_of_money = record(
            "4",
            "The Internet of Money",
            "Andreas Antonopoulos",
            19.99,
            4.6,
            678,
            "A collection of talks about the importance of Bitcoin.",
            "philosophy",
            "2016-09-12",
            152,
            "audiobook",
            &["bitcoin", "philosophy", "talks", "economics"],
        );

        let mut digital_gold = record(
            "5",
            "Digital Gold",
            "Nathaniel Popper",
            22.99,
            4.4,
            445,
            "The untold story of Bitcoin and its early pioneers.",
            "history",
            "2015-05-19",
            368,
            "paperback",
            &["bitcoin", "history", "pioneers", "story"],
        );
        digital_gold.bestseller = true;

        let mut age_of_crypto = record(
            "6",
            "The Age of Cryptocurrency",
            "Paul Vigna & Michael J. Casey",
            18.99,
            4.2,
            356,
            "How Bitcoin and digital money are challenging the global economic order.",
            "economics",
            "2015-01-27",
            352,
            "hardcover",
            &["cryptocurrency", "economics", "global-economy", "digital-money"],
        );
        age_of_crypto.original_price = Some(24.99);

        vec![
            bitcoin_standard,
            mastering,
            programming,
            internet_of_money,
            digital_gold,
            age_of_crypto,
        ]
    }

    /// Load the sample synchronously; used by tests and as the startup default.
    pub fn items() -> Result<Vec<Item>, CatalogError> {
        let items = Self::records()
            .into_iter()
            .map(ItemRecord::into_item)
            .collect::<Result<Vec<_>, _>>()?;
        validate_items(&items)?;
        Ok(items)
    }
}

#[async_trait]
impl CatalogProvider for SampleCatalog {
    fn source_name(&self) -> &str {
        "sample"
    }

    async fn list_items(&self) -> Result<Vec<Item>, CatalogError> {
        Self::items()
    }
}
