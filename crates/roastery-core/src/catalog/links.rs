use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::Result;
use crate::types::{CategoryProductLink, ResolvedLink};

/// Replace the full set of category links for a product.
///
/// Deletes every existing link row for the product, then inserts the desired
/// set. The association set is small and fully known, so a full replace
/// cannot drift the way a diff-and-patch could. The caller's transaction
/// spans both steps, so no reader ever observes the product with its links
/// half-applied. An empty desired set leaves the product with no categories.
pub async fn replace_links(
    tx: &mut Transaction<'_, Postgres>,
    product_id: Uuid,
    links: &[ResolvedLink],
) -> Result<()> {
    sqlx::query("DELETE FROM category_product_links WHERE product_id = $1")
        .bind(product_id)
        .execute(&mut **tx)
        .await?;

    for link in links {
        sqlx::query(
            "INSERT INTO category_product_links (product_id, category_id, is_primary)
             VALUES ($1, $2, $3)",
        )
        .bind(product_id)
        .bind(link.category_id)
        .bind(link.is_primary)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

pub async fn get_links(pool: &DbPool, product_id: Uuid) -> Result<Vec<CategoryProductLink>> {
    let links = sqlx::query_as::<_, CategoryProductLink>(
        "SELECT product_id, category_id, is_primary
         FROM category_product_links WHERE product_id = $1 ORDER BY category_id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(links)
}
