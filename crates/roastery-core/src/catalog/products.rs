use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{CatalogError, Result};
use crate::types::{Product, ProductSeed, ProductVariant};

/// Upsert a product by slug within an existing transaction, returning its id.
///
/// A brand-new slug gets the full row plus its image and variant
/// sub-resources. An existing product gets only the scalar attribute subset
/// updated; images and variants are never touched on that path, because
/// order line items hold foreign keys into existing variant rows.
pub async fn reconcile_product(
    tx: &mut Transaction<'_, Postgres>,
    seed: &ProductSeed,
) -> Result<Uuid> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM products WHERE slug = $1")
        .bind(&seed.slug)
        .fetch_optional(&mut **tx)
        .await?;

    if let Some(id) = existing {
        sqlx::query(
            r#"
            UPDATE products SET
                name = $1,
                description = $2,
                origin = $3,
                tasting_notes = $4,
                is_organic = $5,
                is_featured = $6,
                featured_order = $7,
                updated_at = now()
            WHERE id = $8
            "#,
        )
        .bind(&seed.name)
        .bind(&seed.description)
        .bind(&seed.origin)
        .bind(&seed.tasting_notes)
        .bind(seed.is_organic)
        .bind(seed.is_featured)
        .bind(seed.featured_order)
        .bind(id)
        .execute(&mut **tx)
        .await?;

        return Ok(id);
    }

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO products (
            id, slug, name, description, origin, tasting_notes,
            is_organic, is_featured, featured_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&seed.slug)
    .bind(&seed.name)
    .bind(&seed.description)
    .bind(&seed.origin)
    .bind(&seed.tasting_notes)
    .bind(seed.is_organic)
    .bind(seed.is_featured)
    .bind(seed.featured_order)
    .fetch_one(&mut **tx)
    .await?;

    for image in &seed.images {
        sqlx::query(
            "INSERT INTO product_images (id, product_id, url, alt_text, position)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(&image.url)
        .bind(&image.alt_text)
        .bind(image.position)
        .execute(&mut **tx)
        .await?;
    }

    for variant in &seed.variants {
        sqlx::query(
            "INSERT INTO product_variants (id, product_id, name, weight_in_grams, stock_quantity, price_in_cents)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(&variant.name)
        .bind(variant.weight_in_grams)
        .bind(variant.stock_quantity)
        .bind(variant.price_in_cents)
        .execute(&mut **tx)
        .await?;
    }

    Ok(id)
}

pub async fn get_product_by_slug(pool: &DbPool, slug: &str) -> Result<Product> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT id, slug, name, description, origin, tasting_notes,
               is_organic, is_featured, featured_order, created_at, updated_at
        FROM products WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| CatalogError::Validation(format!("Product with slug '{}' not found.", slug)))
}

pub async fn get_variants(pool: &DbPool, product_id: Uuid) -> Result<Vec<ProductVariant>> {
    let variants = sqlx::query_as::<_, ProductVariant>(
        "SELECT id, product_id, name, weight_in_grams, stock_quantity, price_in_cents
         FROM product_variants WHERE product_id = $1 ORDER BY name",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(variants)
}
