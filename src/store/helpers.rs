//! Storefront Business Logic Helpers
//!
//! Pure functions behind the store operations: product filtering and
//! sorting, address defaulting and variant resolution.

use super::models::{
    Address, AddressInput, Product, ProductQuery, ProductVariant, SortKey, SortOrder,
};
use crate::error::{StoreError, StoreResult};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use uuid::Uuid;

/// Order keys the store assigns itself; caller copies are dropped.
pub const ORDER_RESERVED_KEYS: &[&str] = &[
    "id",
    "number",
    "lineItems",
    "billingAddress",
    "shippingAddress",
    "createdAt",
    "updatedAt",
    "deletedAt",
];

/// Line item keys the store assigns itself
pub const LINE_ITEM_RESERVED_KEYS: &[&str] =
    &["id", "productVariantId", "productVariant", "quantity"];

/// Customer keys the store assigns itself
pub const CUSTOMER_RESERVED_KEYS: &[&str] = &["id", "createdAt", "updatedAt", "deletedAt"];

/// Removes `reserved` keys from caller pass-through fields so the values the
/// store assigns are the only ones serialized.
pub fn strip_reserved(
    mut extra: HashMap<String, Value>,
    reserved: &[&str],
) -> HashMap<String, Value> {
    extra.retain(|key, _| {
        let keep = !reserved.contains(&key.as_str());
        if !keep {
            tracing::debug!(key = %key, "dropped reserved caller field");
        }
        keep
    });
    extra
}

/// Maps common accented Latin letters to their base letter.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

fn primary_key(s: &str) -> String {
    s.chars().map(fold_diacritic).flat_map(char::to_lowercase).collect()
}

/// Approximates a locale collator for Latin-script names.
///
/// Letters compare without accents and case first. Remaining ties put the
/// unaccented form first, then lowercase before uppercase. This is not full
/// Unicode collation.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            let tertiary = |s: &str| -> Vec<(bool, char)> {
                s.chars().map(|c| (c.is_uppercase(), c)).collect()
            };
            tertiary(a).cmp(&tertiary(b))
        })
}

/// Applies a product query to the catalogue, preserving declaration order
/// unless both a sort key and a sort order are present.
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut items: Vec<Product> = products
        .iter()
        .filter(|p| {
            query
                .collection_id
                .as_deref()
                .map_or(true, |collection_id| p.in_collection(collection_id))
        })
        .filter(|p| query.ids.as_ref().map_or(true, |ids| ids.contains(&p.id)))
        .cloned()
        .collect();

    if let (Some(sort), Some(order)) = (query.sort, query.order) {
        sort_products(&mut items, sort, order);
    }

    items
}

/// Stable sort; equal keys keep their relative order in both directions.
pub fn sort_products(items: &mut [Product], sort: SortKey, order: SortOrder) {
    items.sort_by(|a, b| {
        let (a, b) = match order {
            SortOrder::Asc => (a, b),
            SortOrder::Desc => (b, a),
        };
        match sort {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Name => locale_cmp(&a.name, &b.name),
        }
    });
}

/// Fills absent address fields: text lines become empty strings, contact
/// fields stay null.
pub fn normalize_address(input: Option<AddressInput>) -> Address {
    let input = input.unwrap_or_default();
    Address {
        line1: input.line1.unwrap_or_default(),
        line2: input.line2.unwrap_or_default(),
        city: input.city.unwrap_or_default(),
        country: input.country.unwrap_or_default(),
        province: input.province.unwrap_or_default(),
        postal: input.postal.unwrap_or_default(),
        phone: input.phone,
        company: input.company,
        first_name: input.first_name,
        last_name: input.last_name,
    }
}

/// Finds the first product, in declaration order, owning `variant_id` and
/// joins the two.
pub fn resolve_variant(products: &[Product], variant_id: &str) -> StoreResult<ProductVariant> {
    products
        .iter()
        .find_map(|product| {
            product.variant(variant_id).map(|variant| ProductVariant {
                variant: variant.clone(),
                product: product.clone(),
            })
        })
        .ok_or_else(|| StoreError::VariantNotFound(variant_id.to_string()))
}

/// Generates a fresh line item identifier.
pub fn new_line_item_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use chrono::Utc;

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("Astro", "Astro"), Ordering::Equal);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_folds_accents() {
        assert_eq!(locale_cmp("Los más", "Los mz"), Ordering::Less);
        assert_eq!(locale_cmp("Ángel", "Beto"), Ordering::Less);
        assert_eq!(locale_cmp("mas", "más"), Ordering::Less);
        assert_eq!(locale_cmp("más", "mat"), Ordering::Less);
    }

    #[test]
    fn test_strip_reserved_keeps_other_fields() {
        let extra = HashMap::from([
            ("id".to_string(), Value::from("caller-id")),
            ("number".to_string(), Value::from(7)),
            ("email".to_string(), Value::from("ana@example.com")),
        ]);
        let kept = strip_reserved(extra, ORDER_RESERVED_KEYS);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept["email"], "ana@example.com");
    }

    #[test]
    fn test_sort_needs_both_key_and_order() {
        let products = seed::products(Utc::now());
        let declared: Vec<String> = products.iter().map(|p| p.id.clone()).collect();

        let only_key = ProductQuery {
            sort: Some(SortKey::Price),
            ..Default::default()
        };
        let ids: Vec<String> = filter_products(&products, &only_key)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, declared);

        let only_order = ProductQuery {
            order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let ids: Vec<String> = filter_products(&products, &only_order)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, declared);
    }

    #[test]
    fn test_price_ties_keep_declaration_order() {
        let products = seed::products(Utc::now());
        let query = ProductQuery::default().sorted(SortKey::Price, SortOrder::Desc);
        let ids: Vec<String> = filter_products(&products, &query)
            .into_iter()
            .filter(|p| p.price == 500)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["sticker-pack", "lighthouse-100-sticker"]);
    }

    #[test]
    fn test_normalize_address_defaults() {
        let empty = normalize_address(None);
        assert_eq!(empty.line1, "");
        assert_eq!(empty.postal, "");
        assert_eq!(empty.phone, None);
        assert_eq!(empty.first_name, None);

        let partial = normalize_address(Some(AddressInput {
            city: Some("Valparaíso".into()),
            company: Some("Astro".into()),
            ..Default::default()
        }));
        assert_eq!(partial.city, "Valparaíso");
        assert_eq!(partial.country, "");
        assert_eq!(partial.company.as_deref(), Some("Astro"));
        assert_eq!(partial.last_name, None);
    }

    #[test]
    fn test_resolve_variant_picks_first_owner() {
        let products = seed::products(Utc::now());

        let default = resolve_variant(&products, "default").unwrap();
        assert_eq!(default.product.id, "astro-logo-curve-bill-snapback-cap");
        assert_eq!(default.variant.stock, 20);

        let medium = resolve_variant(&products, "M").unwrap();
        assert_eq!(medium.product.id, "astro-icon-zip-up-hoodie");
        assert_eq!(medium.variant.options["Size"], "M");

        assert_eq!(
            resolve_variant(&products, "XXXXL").unwrap_err(),
            StoreError::VariantNotFound("XXXXL".into())
        );
    }

    #[test]
    fn test_line_item_ids_are_fresh() {
        assert_ne!(new_line_item_id(), new_line_item_id());
    }
}
