use std::env;

use anyhow::Result;
use roastery_core::error::CatalogError;
use roastery_core::types::{CategorySeed, ImageSeed, LinkSeed, ProductSeed, VariantSeed};
use roastery_core::{catalog, db, seed};
use uuid::Uuid;

/// Connect to the test database, or skip the test when the URL is not set.
async fn test_pool() -> Result<Option<db::DbPool>> {
    let database_url = match env::var("ROASTERY_TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping catalog test because ROASTERY_TEST_DATABASE_URL is not set");
            return Ok(None);
        }
    };

    let pool = db::connect(&database_url).await?;
    db::run_migrations(&pool).await?;
    Ok(Some(pool))
}

/// Tests run in parallel against one database, so every test namespaces its
/// rows with a unique slug prefix instead of truncating shared tables.
fn prefix() -> String {
    Uuid::new_v4().simple().to_string()
}

fn category(prefix: &str, slug: &str, name: &str) -> CategorySeed {
    CategorySeed {
        slug: format!("{prefix}-{slug}"),
        name: name.into(),
        label: Some("Collections".into()),
        position: 0,
    }
}

fn product(prefix: &str, slug: &str, links: Vec<(&str, bool)>) -> ProductSeed {
    ProductSeed {
        slug: format!("{prefix}-{slug}"),
        name: "House Espresso".into(),
        description: "A test roast.".into(),
        origin: vec!["Brazil".into(), "Colombia".into()],
        tasting_notes: vec!["Chocolate".into(), "Caramel".into()],
        is_organic: false,
        is_featured: false,
        featured_order: None,
        images: vec![ImageSeed {
            url: "https://cdn.roastery.example/products/test.png".into(),
            alt_text: "House Espresso bag".into(),
            position: 1,
        }],
        variants: vec![
            VariantSeed {
                name: "12oz Bag".into(),
                weight_in_grams: 340,
                stock_quantity: 100,
                price_in_cents: 2200,
            },
            VariantSeed {
                name: "2lb Bag".into(),
                weight_in_grams: 907,
                stock_quantity: 50,
                price_in_cents: 5600,
            },
        ],
        categories: links
            .into_iter()
            .map(|(slug, is_primary)| LinkSeed {
                category: format!("{prefix}-{slug}"),
                is_primary,
            })
            .collect(),
    }
}

async fn count_rows(pool: &db::DbPool, table: &str, slug: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE slug = $1"))
        .bind(slug)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[tokio::test]
async fn reconciliation_is_idempotent() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let categories = vec![category(&p, "blends", "Blend"), category(&p, "dark", "Dark Roast")];
    let products = vec![product(&p, "espresso", vec![("blends", true), ("dark", false)])];

    seed::apply(&pool, &categories, &products).await?;
    seed::apply(&pool, &categories, &products).await?; // second run must be a no-op

    for cat in &categories {
        assert_eq!(count_rows(&pool, "categories", &cat.slug).await?, 1);
    }
    assert_eq!(count_rows(&pool, "products", &products[0].slug).await?, 1);

    let stored = catalog::get_product_by_slug(&pool, &products[0].slug).await?;
    let links = catalog::get_links(&pool, stored.id).await?;
    assert_eq!(links.len(), 2, "expected the same link set after a re-run");
    assert_eq!(links.iter().filter(|l| l.is_primary).count(), 1);

    Ok(())
}

#[tokio::test]
async fn existing_category_attributes_are_not_overwritten() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let first = vec![category(&p, "blends", "Old Name")];
    seed::apply(&pool, &first, &[]).await?;

    let renamed = vec![category(&p, "blends", "Blends")];
    seed::apply(&pool, &renamed, &[]).await?;

    let stored = catalog::get_category_by_slug(&pool, &first[0].slug).await?;
    assert_eq!(stored.name, "Old Name", "reseeding must not rename a curated category");

    Ok(())
}

#[tokio::test]
async fn product_update_touches_only_the_scalar_subset() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let categories = vec![category(&p, "blends", "Blend")];
    let mut products = vec![product(&p, "espresso", vec![("blends", true)])];
    seed::apply(&pool, &categories, &products).await?;

    let before = catalog::get_product_by_slug(&pool, &products[0].slug).await?;
    let variants_before = catalog::get_variants(&pool, before.id).await?;
    assert_eq!(variants_before.len(), 2);

    // Re-run with changed scalar fields and a changed variant list. Only the
    // scalar fields may land; variants and images belong to the creation path.
    products[0].is_featured = true;
    products[0].featured_order = Some(1);
    products[0].description = "An updated test roast.".into();
    products[0].variants = vec![VariantSeed {
        name: "12oz Bag".into(),
        weight_in_grams: 340,
        stock_quantity: 1,
        price_in_cents: 9999,
    }];
    seed::apply(&pool, &categories, &products).await?;

    let after = catalog::get_product_by_slug(&pool, &products[0].slug).await?;
    assert_eq!(after.id, before.id);
    assert!(after.is_featured);
    assert_eq!(after.featured_order, Some(1));
    assert_eq!(after.description, "An updated test roast.");

    let variants_after = catalog::get_variants(&pool, after.id).await?;
    assert_eq!(variants_after.len(), 2, "variants must survive a reconcile untouched");
    let twelve_oz = variants_after.iter().find(|v| v.name == "12oz Bag").unwrap();
    assert_eq!(twelve_oz.price_in_cents, 2200);

    let image_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM product_images WHERE product_id = $1")
            .bind(after.id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(image_count, 1);

    Ok(())
}

#[tokio::test]
async fn links_are_fully_replaced() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let categories = vec![
        category(&p, "a", "Category A"),
        category(&p, "b", "Category B"),
        category(&p, "c", "Category C"),
    ];
    let mut products = vec![product(&p, "espresso", vec![("a", true), ("b", false)])];
    seed::apply(&pool, &categories, &products).await?;

    products[0].categories = vec![LinkSeed {
        category: format!("{p}-c"),
        is_primary: true,
    }];
    seed::apply(&pool, &categories, &products).await?;

    let stored = catalog::get_product_by_slug(&pool, &products[0].slug).await?;
    let links = catalog::get_links(&pool, stored.id).await?;
    let category_c = catalog::get_category_by_slug(&pool, &format!("{p}-c")).await?;

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].category_id, category_c.id);
    assert!(links[0].is_primary);

    Ok(())
}

#[tokio::test]
async fn empty_desired_links_clear_all_associations() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let categories = vec![category(&p, "blends", "Blend")];
    let mut products = vec![product(&p, "espresso", vec![("blends", true)])];
    seed::apply(&pool, &categories, &products).await?;

    products[0].categories = vec![];
    seed::apply(&pool, &categories, &products).await?;

    let stored = catalog::get_product_by_slug(&pool, &products[0].slug).await?;
    let links = catalog::get_links(&pool, stored.id).await?;
    assert!(links.is_empty(), "a product with no desired links ends with zero link rows");

    Ok(())
}

#[tokio::test]
async fn malformed_input_aborts_before_later_entries() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let p = prefix();
    let categories = vec![category(&p, "blends", "Blend")];
    let products = vec![
        product(&p, "broken", vec![("missing", true)]),
        product(&p, "untouched", vec![("blends", true)]),
    ];

    let err = seed::apply(&pool, &categories, &products)
        .await
        .expect_err("unknown category reference must be fatal");
    assert!(matches!(err, CatalogError::Validation(_)));

    assert_eq!(count_rows(&pool, "products", &products[0].slug).await?, 0);
    assert_eq!(
        count_rows(&pool, "products", &products[1].slug).await?,
        0,
        "entries after the failing one must not be applied"
    );

    Ok(())
}

#[tokio::test]
async fn shipped_dataset_reconciles_idempotently() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    seed::run(&pool).await?;
    seed::run(&pool).await?;

    for cat in seed::category_seeds() {
        assert_eq!(count_rows(&pool, "categories", &cat.slug).await?, 1);
    }
    for prod in seed::product_seeds() {
        assert_eq!(count_rows(&pool, "products", &prod.slug).await?, 1);
    }

    Ok(())
}
