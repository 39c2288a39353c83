//! Static supplies catalog.
//!
//! The shop sells a fixed list of packing supplies. The catalog is built
//! once at startup, owned by application state, and never mutated.

use swiftparcel_core::{CurrencyCode, Money, ProductId};

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description shown on the shop page.
    pub description: String,
}

/// The fixed, ordered product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the standard demo catalog of packing supplies.
    #[must_use]
    pub fn standard() -> Self {
        let entries: [(&str, &str, i64, &str); 7] = [
            ("bx-s", "Small Box", 199, "30x22x12cm single-wall box, holds up to 5kg."),
            ("bx-m", "Medium Box", 349, "45x30x20cm double-wall box, holds up to 15kg."),
            ("bx-l", "Large Box", 499, "60x40x30cm double-wall box, holds up to 25kg."),
            ("tap", "Packing Tape", 249, "48mm x 66m clear tape, one roll."),
            ("bbl", "Bubble Wrap", 699, "50cm x 10m roll of small-bubble wrap."),
            ("lbl", "Shipping Labels", 399, "Pack of 50 self-adhesive A6 labels."),
            ("env", "Padded Mailer", 99, "A4 padded envelope for documents and small items."),
        ];

        let products = entries
            .into_iter()
            .filter_map(|(id, name, cents, description)| {
                // Ids here are compile-time constants; a bad one is a bug,
                // so it is logged and skipped rather than panicking.
                match ProductId::parse(id) {
                    Ok(id) => Some(Product {
                        id,
                        name: name.to_string(),
                        price: Money::from_cents(cents, CurrencyCode::USD),
                        description: description.to_string(),
                    }),
                    Err(e) => {
                        tracing::error!(product = id, error = %e, "invalid catalog id");
                        None
                    }
                }
            })
            .collect();

        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_standard_catalog_is_populated() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_known_product() {
        let catalog = Catalog::standard();
        let id = ProductId::parse("bx-s").unwrap();

        let product = catalog.lookup(&id).unwrap();
        assert_eq!(product.name, "Small Box");
        assert_eq!(product.price.amount, Decimal::new(199, 2));
    }

    #[test]
    fn test_lookup_tape_price() {
        let catalog = Catalog::standard();
        let id = ProductId::parse("tap").unwrap();

        let product = catalog.lookup(&id).unwrap();
        assert_eq!(product.price.amount, Decimal::new(249, 2));
    }

    #[test]
    fn test_lookup_unknown_product() {
        let catalog = Catalog::standard();
        let id = ProductId::parse("no-such-item").unwrap();

        assert!(catalog.lookup(&id).is_none());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let catalog = Catalog::standard();
        let first = catalog.all().first().unwrap();
        assert_eq!(first.id.as_str(), "bx-s");
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::standard();
        for (i, a) in catalog.all().iter().enumerate() {
            for b in catalog.all().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
