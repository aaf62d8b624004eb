mod data;

pub use data::{category_seeds, product_seeds};

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use crate::catalog::{ensure_categories, reconcile_product, replace_links};
use crate::db::DbPool;
use crate::error::{CatalogError, Result};
use crate::types::{CategorySeed, ProductSeed, ResolvedLink};

/// Reconcile the fixed coffee catalog into the database.
///
/// Safe to run repeatedly: categories and products are upserted by slug,
/// and each product's category links are fully replaced per run.
pub async fn run(pool: &DbPool) -> Result<()> {
    apply(pool, &category_seeds(), &product_seeds()).await
}

/// Reconcile an arbitrary desired-state input against the database.
///
/// Categories are ensured first because every downstream step consumes
/// resolved ids, not slugs. Products are then processed strictly in input
/// order; any error aborts the remaining queue. Each product's upsert and
/// link replacement share one transaction, so the transient window in which
/// a product has zero categories is never observable from outside.
pub async fn apply(
    pool: &DbPool,
    categories: &[CategorySeed],
    products: &[ProductSeed],
) -> Result<()> {
    let category_map = ensure_categories(pool, categories).await?;

    for seed in products {
        let links = resolve_links(seed, &category_map)?;

        let mut tx = pool.begin().await?;
        let product_id = reconcile_product(&mut tx, seed).await?;
        replace_links(&mut tx, product_id, &links).await?;
        tx.commit().await?;

        info!(slug = %seed.slug, "✓ {}", seed.name);
    }

    Ok(())
}

fn resolve_links(
    seed: &ProductSeed,
    category_map: &HashMap<String, Uuid>,
) -> Result<Vec<ResolvedLink>> {
    seed.categories
        .iter()
        .map(|link| {
            category_map
                .get(&link.category)
                .copied()
                .map(|category_id| ResolvedLink {
                    category_id,
                    is_primary: link.is_primary,
                })
                .ok_or_else(|| {
                    CatalogError::Validation(format!(
                        "Product '{}' references unknown category '{}'.",
                        seed.slug, link.category
                    ))
                })
        })
        .collect()
}
