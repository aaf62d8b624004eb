pub mod categories;
pub mod links;
pub mod products;

pub use categories::{ensure_categories, ensure_category, get_category_by_slug};
pub use links::{get_links, replace_links};
pub use products::{get_product_by_slug, get_variants, reconcile_product};
