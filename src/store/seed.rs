//! Seed catalogue loaded into every new store.

use super::models::{Collection, Product, Timestamp, Variant};
use std::collections::BTreeMap;

const APPAREL_SIZES: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

fn default_variant() -> Variant {
    Variant {
        id: "default".to_string(),
        name: "Default".to_string(),
        stock: 20,
        options: BTreeMap::new(),
    }
}

fn apparel_variants() -> Vec<Variant> {
    APPAREL_SIZES
        .iter()
        .zip(0u32..)
        .map(|(size, index)| Variant {
            id: size.to_string(),
            name: size.to_string(),
            stock: index * 12,
            options: BTreeMap::from([("Size".to_string(), size.to_string())]),
        })
        .collect()
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    tagline: &'static str,
    price: i64,
    discount: i64,
    image_url: &'static str,
    collection_ids: &'static [&'static str],
    apparel: bool,
}

const PRODUCTS: [ProductSeed; 9] = [
    ProductSeed {
        id: "astro-icon-zip-up-hoodie",
        name: "Modelo P_001",
        tagline: "No need to compress this .zip. The Zip Up Hoodie is a comfortable fit and fabric for all sizes.",
        price: 1_200_000,
        discount: 0,
        image_url: "/assets/modelP_001.jpg",
        collection_ids: &["apparel", "bestSellers"],
        apparel: true,
    },
    ProductSeed {
        id: "astro-logo-curve-bill-snapback-cap",
        name: "Astro Logo Curve Bill Snapback Cap",
        tagline: "The best hat for any occasion, no cap.",
        price: 2500,
        discount: 0,
        image_url: "/assets/astro-cap.png",
        collection_ids: &["apparel"],
        apparel: false,
    },
    ProductSeed {
        id: "astro-sticker-sheet",
        name: "Astro Sticker Sheet",
        tagline: "You probably want this for the fail whale sticker, don't you?",
        price: 1000,
        discount: 0,
        image_url: "/assets/astro-universe-stickers.png",
        collection_ids: &["stickers"],
        apparel: false,
    },
    ProductSeed {
        id: "sticker-pack",
        name: "Sticker Pack",
        tagline: "Jam packed with the most popular stickers.",
        price: 500,
        discount: 0,
        image_url: "/assets/astro-sticker-pack.png",
        collection_ids: &["stickers", "bestSellers"],
        apparel: false,
    },
    ProductSeed {
        id: "astro-icon-unisex-shirt",
        name: "Astro Icon Unisex Shirt",
        tagline: "A comfy Tee with the classic Astro logo.",
        price: 1775,
        discount: 0,
        image_url: "/assets/astro-unisex-tshirt.png",
        collection_ids: &["apparel"],
        apparel: true,
    },
    ProductSeed {
        id: "astro-icon-gradient-sticker",
        name: "Astro Icon Gradient Sticker",
        tagline: "There gradi-ain't a better sticker than the classic Astro logo.",
        price: 200,
        discount: 0,
        image_url: "/assets/astro-icon-sticker.png",
        collection_ids: &["stickers", "bestSellers"],
        apparel: false,
    },
    ProductSeed {
        id: "astro-logo-beanie",
        name: "Astro Logo Beanie",
        tagline: "There's never Bean a better hat for the winter season.",
        price: 1800,
        discount: 0,
        image_url: "/assets/astro-beanie.png",
        collection_ids: &["apparel", "bestSellers"],
        apparel: false,
    },
    ProductSeed {
        id: "lighthouse-100-sticker",
        name: "Lighthouse 100 Sticker",
        tagline: "Bad performance? Not in my (light) house.",
        price: 500,
        discount: 0,
        image_url: "/assets/astro-lighthouse-sticker.png",
        collection_ids: &["stickers"],
        apparel: false,
    },
    ProductSeed {
        id: "houston-sticker",
        name: "Houston Sticker",
        tagline: "You can fit a Hous-ton of these on any laptop lid.",
        price: 250,
        discount: 100,
        image_url: "/assets/astro-houston-sticker.png",
        collection_ids: &["stickers", "bestSellers"],
        apparel: false,
    },
];

/// Seed products in declaration order, stamped with `now`.
pub fn products(now: Timestamp) -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            slug: seed.id.to_string(),
            tagline: seed.tagline.to_string(),
            description: String::new(),
            price: seed.price,
            discount: seed.discount,
            image_url: seed.image_url.to_string(),
            images: Vec::new(),
            collection_ids: seed.collection_ids.iter().map(|c| c.to_string()).collect(),
            variants: if seed.apparel {
                apparel_variants()
            } else {
                vec![default_variant()]
            },
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
        .collect()
}

/// Seed collections in declaration order, stamped with `now`.
pub fn collections(now: Timestamp) -> Vec<Collection> {
    [
        (
            "apparel",
            "Perros",
            "Wear your love for Astro on your sleeve.",
            "apparel",
            "/assets/perros.jpg",
        ),
        (
            "stickers",
            "Gatos",
            "Load up those laptop lids with Astro pride.",
            "stickers",
            "/assets/astro-sticker-pack.png",
        ),
        (
            "bestSellers",
            "Los más vendidos",
            "You'll love these.",
            "best-sellers",
            "/assets/astro-houston-sticker.png",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, slug, image_url)| Collection {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        slug: slug.to_string(),
        image_url: image_url.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_every_product_has_a_variant() {
        let products = products(Utc::now());
        assert_eq!(products.len(), 9);
        assert!(products.iter().all(|p| !p.variants.is_empty()));
    }

    #[test]
    fn test_apparel_stock_grows_by_size() {
        let stock: Vec<u32> = apparel_variants().iter().map(|v| v.stock).collect();
        assert_eq!(stock, vec![0, 12, 24, 36, 48, 60, 72]);
    }

    #[test]
    fn test_collections_reference_known_ids() {
        let collections = collections(Utc::now());
        let known: Vec<&str> = collections.iter().map(|c| c.id.as_str()).collect();
        for product in products(Utc::now()) {
            for id in &product.collection_ids {
                assert!(known.contains(&id.as_str()), "{} has unknown {}", product.id, id);
            }
        }
    }
}
