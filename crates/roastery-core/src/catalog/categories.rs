use std::collections::HashMap;

use sqlx::postgres::PgQueryResult;
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{CatalogError, Result};
use crate::types::{Category, CategorySeed};

/// Create-or-fetch a category by its slug, returning the surrogate id.
///
/// The taxonomy is hand-curated once seeded, so an existing row keeps its
/// stored name/label; only a missing row is inserted. Calling this N times
/// with the same slug yields one row and the same id each time.
pub async fn ensure_category(pool: &DbPool, seed: &CategorySeed) -> Result<Uuid> {
    let result: PgQueryResult = sqlx::query(
        r#"
        INSERT INTO categories (id, slug, name, label, position)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (slug) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&seed.slug)
    .bind(&seed.name)
    .bind(&seed.label)
    .bind(seed.position)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!(slug = %seed.slug, "Seeded category");
    }

    sqlx::query_scalar("SELECT id FROM categories WHERE slug = $1")
        .bind(&seed.slug)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| {
            CatalogError::Validation(format!("Category '{}' missing after upsert.", seed.slug))
        })
}

/// Ensure the full fixed category set and return a slug -> id lookup map
/// for the downstream product and link reconcilers.
pub async fn ensure_categories(
    pool: &DbPool,
    seeds: &[CategorySeed],
) -> Result<HashMap<String, Uuid>> {
    let mut category_map = HashMap::new();
    for seed in seeds {
        let id = ensure_category(pool, seed).await?;
        category_map.insert(seed.slug.clone(), id);
    }
    info!(count = category_map.len(), "Categories ensured");
    Ok(category_map)
}

pub async fn get_category_by_slug(pool: &DbPool, slug: &str) -> Result<Category> {
    sqlx::query_as::<_, Category>(
        "SELECT id, slug, name, label, position FROM categories WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| CatalogError::Validation(format!("Category with slug '{}' not found.", slug)))
}
