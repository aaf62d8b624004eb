//! The fixed desired-state catalog: category taxonomy and coffee products.
//!
//! Category links are declared by slug and resolved to ids by the
//! orchestrator once the categories have been ensured.

use crate::types::{CategorySeed, ImageSeed, LinkSeed, ProductSeed, VariantSeed};

const LABEL_ROASTS: &str = "Roasts";
const LABEL_ORIGINS: &str = "Origins";
const LABEL_COLLECTIONS: &str = "Collections";

fn category(slug: &str, name: &str, label: &str, position: i32) -> CategorySeed {
    CategorySeed {
        slug: slug.into(),
        name: name.into(),
        label: Some(label.into()),
        position,
    }
}

pub fn category_seeds() -> Vec<CategorySeed> {
    let mut seeds = vec![
        category("light-roast", "Light Roast", LABEL_ROASTS, 1),
        category("medium-roast", "Medium Roast", LABEL_ROASTS, 2),
        category("dark-roast", "Dark Roast", LABEL_ROASTS, 3),
        category("blends", "Blend", LABEL_COLLECTIONS, 20),
        category("micro-lot", "Micro Lot", LABEL_COLLECTIONS, 21),
        category("single-origin", "Single Origin", LABEL_COLLECTIONS, 22),
    ];

    let origins = [
        "Ethiopia",
        "Kenya",
        "Colombia",
        "Guatemala",
        "Costa Rica",
        "Brazil",
        "Indonesia",
        "Honduras",
        "Peru",
        "Rwanda",
    ];
    for (i, origin) in origins.iter().enumerate() {
        let slug = origin.to_lowercase().replace(' ', "-");
        seeds.push(category(&slug, origin, LABEL_ORIGINS, 100 + i as i32));
    }

    seeds
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn link(category: &str, is_primary: bool) -> LinkSeed {
    LinkSeed {
        category: category.into(),
        is_primary,
    }
}

fn bag(name: &str, weight_in_grams: i32, stock_quantity: i32, price_in_cents: i32) -> VariantSeed {
    VariantSeed {
        name: name.into(),
        weight_in_grams,
        stock_quantity,
        price_in_cents,
    }
}

fn image(slug: &str, alt_text: &str) -> ImageSeed {
    ImageSeed {
        url: format!("https://cdn.roastery.example/products/{slug}.png"),
        alt_text: alt_text.into(),
        position: 1,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    slug: &str,
    name: &str,
    description: &str,
    origin: &[&str],
    tasting_notes: &[&str],
    is_organic: bool,
    featured_order: Option<i32>,
    variants: Vec<VariantSeed>,
    categories: Vec<LinkSeed>,
) -> ProductSeed {
    ProductSeed {
        slug: slug.into(),
        name: name.into(),
        description: description.into(),
        origin: strings(origin),
        tasting_notes: strings(tasting_notes),
        is_organic,
        is_featured: featured_order.is_some(),
        featured_order,
        images: vec![image(slug, &format!("{name} bag"))],
        variants,
        categories,
    }
}

pub fn product_seeds() -> Vec<ProductSeed> {
    vec![
        product(
            "midnight-espresso-blend",
            "Midnight Espresso Blend",
            "Our signature espresso blend crafted for intense flavor and creamy body. \
             Brazilian, Colombian, and Indonesian beans layer dark chocolate, toasted \
             hazelnut, and caramelized sugar. Built for straight shots and milk drinks alike.",
            &["Brazil", "Colombia", "Indonesia"],
            &["Dark Chocolate", "Toasted Hazelnut", "Caramel"],
            false,
            Some(1),
            vec![bag("12oz Bag", 340, 150, 2200), bag("2lb Bag", 907, 75, 5600)],
            vec![link("blends", true), link("dark-roast", false)],
        ),
        product(
            "italian-roast",
            "Italian Roast",
            "Bold, smoky, and intensely aromatic. A traditional dark roast with notes of \
             bittersweet chocolate, roasted almond, and a hint of smoke for a powerful, \
             full-bodied cup.",
            &["Brazil", "Guatemala"],
            &["Bittersweet Chocolate", "Roasted Almond", "Smoky"],
            false,
            None,
            vec![bag("12oz Bag", 340, 120, 1900), bag("2lb Bag", 907, 60, 4800)],
            vec![link("blends", true), link("dark-roast", false)],
        ),
        product(
            "ethiopia-yirgacheffe",
            "Ethiopia Yirgacheffe",
            "A washed lot from the Yirgacheffe highlands with the bright, tea-like elegance \
             the region is famous for. Jasmine florals give way to lemon zest and a clean \
             honeyed finish.",
            &["Ethiopia"],
            &["Jasmine", "Lemon Zest", "Honey"],
            true,
            Some(2),
            vec![bag("12oz Bag", 340, 90, 2400), bag("2lb Bag", 907, 40, 6200)],
            vec![link("ethiopia", true), link("light-roast", false)],
        ),
        product(
            "kenya-aa-nyeri",
            "Kenya AA Nyeri",
            "Classic Kenyan cup from smallholder farms around Nyeri: vivid blackcurrant \
             acidity, tomato-sweet depth, and a syrupy body that carries through a long \
             grapefruit finish.",
            &["Kenya"],
            &["Blackcurrant", "Grapefruit", "Brown Sugar"],
            false,
            Some(3),
            vec![bag("12oz Bag", 340, 70, 2500)],
            vec![link("kenya", true), link("light-roast", false)],
        ),
        product(
            "colombia-huila-supremo",
            "Colombia Huila Supremo",
            "A dependable crowd-pleaser from the Huila department. Balanced and round, with \
             milk chocolate sweetness, red apple brightness, and a nutty, lingering finish.",
            &["Colombia"],
            &["Milk Chocolate", "Red Apple", "Walnut"],
            false,
            None,
            vec![bag("12oz Bag", 340, 140, 2000), bag("2lb Bag", 907, 80, 5100)],
            vec![link("colombia", true), link("medium-roast", false)],
        ),
        product(
            "guatemala-antigua",
            "Guatemala Antigua",
            "Grown in volcanic soil under the shadow of Volcán de Agua. Cocoa and gentle \
             spice over a structured, medium body with a soft orange acidity.",
            &["Guatemala"],
            &["Cocoa", "Cinnamon", "Orange"],
            false,
            None,
            vec![bag("12oz Bag", 340, 110, 2100)],
            vec![link("guatemala", true), link("medium-roast", false)],
        ),
        product(
            "costa-rica-tarrazu-honey",
            "Costa Rica Tarrazú Honey",
            "A honey-processed micro lot from high-altitude Tarrazú. The mucilage-dried \
             process concentrates stone-fruit sweetness into a juicy cup of apricot, raw \
             honey, and vanilla.",
            &["Costa Rica"],
            &["Apricot", "Raw Honey", "Vanilla"],
            false,
            None,
            vec![bag("12oz Bag", 340, 45, 2600)],
            vec![
                link("costa-rica", true),
                link("light-roast", false),
                link("micro-lot", false),
            ],
        ),
        product(
            "sumatra-mandheling",
            "Sumatra Mandheling",
            "Wet-hulled in the traditional Sumatran style for a heavy, earthy body. Dark \
             cocoa and cedar with a low, rounded acidity that holds up beautifully to milk.",
            &["Indonesia"],
            &["Dark Cocoa", "Cedar", "Earthy"],
            true,
            None,
            vec![bag("12oz Bag", 340, 85, 2300), bag("2lb Bag", 907, 35, 5900)],
            vec![link("indonesia", true), link("dark-roast", false)],
        ),
        product(
            "breakfast-blend",
            "Breakfast Blend",
            "An easy-drinking morning staple blending Brazilian body with Colombian \
             sweetness. Toasted grain, caramel, and a mild citrus lift that plays well \
             with any brew method.",
            &["Brazil", "Colombia"],
            &["Toasted Grain", "Caramel", "Citrus"],
            false,
            Some(4),
            vec![bag("12oz Bag", 340, 160, 1800), bag("2lb Bag", 907, 90, 4600)],
            vec![link("blends", true), link("medium-roast", false)],
        ),
        product(
            "peru-cajamarca-organic",
            "Peru Cajamarca Organic",
            "Certified-organic lots from cooperative growers in Cajamarca. A gentle, sweet \
             cup of toffee and baked pear with a soft floral edge.",
            &["Peru"],
            &["Toffee", "Baked Pear", "Floral"],
            true,
            None,
            vec![bag("12oz Bag", 340, 75, 2200)],
            vec![link("peru", true), link("medium-roast", false)],
        ),
        product(
            "honduras-marcala",
            "Honduras Marcala",
            "A small-producer micro lot from the Marcala appellation. Sweet and comforting, \
             with maple, hazelnut, and a juicy plum acidity.",
            &["Honduras"],
            &["Maple", "Hazelnut", "Plum"],
            false,
            None,
            vec![bag("12oz Bag", 340, 50, 2350)],
            vec![
                link("honduras", true),
                link("medium-roast", false),
                link("micro-lot", false),
            ],
        ),
        product(
            "rwanda-nyamasheke",
            "Rwanda Nyamasheke",
            "Red-bourbon cherries from washing stations on the western shore of Lake Kivu. \
             Bright and silky, with orange blossom, red grape, and a black-tea finish.",
            &["Rwanda"],
            &["Orange Blossom", "Red Grape", "Black Tea"],
            false,
            None,
            vec![bag("12oz Bag", 340, 55, 2450)],
            vec![
                link("rwanda", true),
                link("light-roast", false),
                link("micro-lot", false),
            ],
        ),
    ]
}
