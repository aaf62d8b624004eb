use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub label: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub origin: Vec<String>,
    pub tasting_notes: Vec<String>,
    pub is_organic: bool,
    pub is_featured: bool,
    pub featured_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub weight_in_grams: i32,
    pub stock_quantity: i32,
    pub price_in_cents: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CategoryProductLink {
    pub product_id: Uuid,
    pub category_id: Uuid,
    pub is_primary: bool,
}

// --- Desired-state input ---

#[derive(Debug, Clone)]
pub struct CategorySeed {
    pub slug: String,
    pub name: String,
    pub label: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub origin: Vec<String>,
    pub tasting_notes: Vec<String>,
    pub is_organic: bool,
    pub is_featured: bool,
    pub featured_order: Option<i32>,
    pub images: Vec<ImageSeed>,
    pub variants: Vec<VariantSeed>,
    /// Category links by slug; resolved to ids after the categories
    /// themselves have been ensured.
    pub categories: Vec<LinkSeed>,
}

#[derive(Debug, Clone)]
pub struct ImageSeed {
    pub url: String,
    pub alt_text: String,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct VariantSeed {
    pub name: String,
    pub weight_in_grams: i32,
    pub stock_quantity: i32,
    pub price_in_cents: i32,
}

#[derive(Debug, Clone)]
pub struct LinkSeed {
    pub category: String,
    pub is_primary: bool,
}

/// A category link with its slug already resolved to a surrogate id.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLink {
    pub category_id: Uuid,
    pub is_primary: bool,
}
