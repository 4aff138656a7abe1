//! Catalog Service - indexed, read-only product and modifier lookup
//!
//! Built once at process start from pre-validated menu data. Validation is
//! fail-fast: a catalog that references itself inconsistently or carries
//! priced REMOVE modifiers never becomes a `Catalog`, so the cart engine
//! can treat every resolved id as trustworthy.

use shared::models::{Modifier, ModifierAction, ModifierGroup, Product};
use std::collections::HashMap;
use thiserror::Error;

/// Catalog load errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Duplicate modifier id: {0}")]
    DuplicateModifier(String),

    #[error("Product {0} has negative price")]
    NegativePrice(String),

    #[error("Product {id} old_price {old_price} must be greater than price {price}")]
    OldPriceNotGreater {
        id: String,
        old_price: i64,
        price: i64,
    },

    #[error("REMOVE modifier {0} must have price 0, got {1}")]
    PricedRemoveModifier(String, i64),

    #[error("Modifier {0} has negative price")]
    NegativeModifierPrice(String),
}

/// Immutable, indexed menu
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    groups: Vec<ModifierGroup>,
    product_index: HashMap<String, usize>,
    /// Flattened over all groups
    modifier_index: HashMap<String, Modifier>,
}

impl Catalog {
    /// Build and validate the catalog
    pub fn new(products: Vec<Product>, groups: Vec<ModifierGroup>) -> Result<Self, CatalogError> {
        let mut product_index = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if product.price < 0 {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if let Some(old_price) = product.old_price
                && old_price <= product.price
            {
                return Err(CatalogError::OldPriceNotGreater {
                    id: product.id.clone(),
                    old_price,
                    price: product.price,
                });
            }
            if product_index.insert(product.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        let mut modifier_index = HashMap::new();
        for group in &groups {
            for option in &group.options {
                if option.price < 0 {
                    return Err(CatalogError::NegativeModifierPrice(option.id.clone()));
                }
                if option.action == ModifierAction::Remove && option.price != 0 {
                    return Err(CatalogError::PricedRemoveModifier(
                        option.id.clone(),
                        option.price,
                    ));
                }
                if modifier_index
                    .insert(option.id.clone(), option.clone())
                    .is_some()
                {
                    return Err(CatalogError::DuplicateModifier(option.id.clone()));
                }
            }
        }

        tracing::debug!(
            products = products.len(),
            modifier_groups = groups.len(),
            modifiers = modifier_index.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products,
            groups,
            product_index,
            modifier_index,
        })
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.product_index.get(id).map(|&idx| &self.products[idx])
    }

    pub fn modifier(&self, id: &str) -> Option<&Modifier> {
        self.modifier_index.get(id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn modifier_groups(&self) -> &[ModifierGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SelectionRule;

    fn modifier(id: &str, price: i64, action: ModifierAction) -> Modifier {
        Modifier {
            id: id.to_string(),
            name: id.to_string(),
            price,
            action,
        }
    }

    fn group(id: &str, options: Vec<Modifier>) -> ModifierGroup {
        ModifierGroup {
            id: id.to_string(),
            name: id.to_string(),
            selection: SelectionRule::AnyOf,
            options,
        }
    }

    #[test]
    fn lookups_resolve_by_id() {
        let catalog = Catalog::new(
            vec![Product::new("p1", "Burger", "Бургеры", 490)],
            vec![group("g1", vec![modifier("m1", 150, ModifierAction::Add)])],
        )
        .unwrap();

        assert_eq!(catalog.product("p1").unwrap().price, 490);
        assert_eq!(catalog.modifier("m1").unwrap().price, 150);
        assert!(catalog.product("p2").is_none());
        assert!(catalog.modifier("m2").is_none());
    }

    #[test]
    fn duplicate_product_id_rejected() {
        let result = Catalog::new(
            vec![
                Product::new("p1", "Burger", "Бургеры", 490),
                Product::new("p1", "Other", "Снэки", 100),
            ],
            vec![],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(id)) if id == "p1"));
    }

    #[test]
    fn priced_remove_modifier_rejected() {
        let result = Catalog::new(
            vec![],
            vec![group(
                "g1",
                vec![modifier("m-no-onion", 20, ModifierAction::Remove)],
            )],
        );
        assert!(matches!(
            result,
            Err(CatalogError::PricedRemoveModifier(id, 20)) if id == "m-no-onion"
        ));
    }

    #[test]
    fn free_remove_modifier_accepted() {
        let catalog = Catalog::new(
            vec![],
            vec![group(
                "g1",
                vec![modifier("m-no-onion", 0, ModifierAction::Remove)],
            )],
        )
        .unwrap();
        assert_eq!(catalog.modifier("m-no-onion").unwrap().price, 0);
    }

    #[test]
    fn old_price_must_exceed_price() {
        let mut product = Product::new("p1", "Burger", "Бургеры", 490);
        product.old_price = Some(490);
        let result = Catalog::new(vec![product], vec![]);
        assert!(matches!(result, Err(CatalogError::OldPriceNotGreater { .. })));
    }
}
