//! Cart Engine - the shopper's in-progress selections
//!
//! One active cart per session. Lines are keyed by configuration
//! signature: adding an identical configuration merges quantities, a
//! different one appends. Prices always come from the catalog, never from
//! the caller.

pub mod signature;

use crate::catalog::Catalog;
use shared::models::Modifier;
use shared::order::{CartAdd, CartLine};
use thiserror::Error;

/// Cart errors
///
/// All recoverable: a rejected add leaves the cart untouched.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
}

/// The single active cart
#[derive(Debug, Default)]
pub struct CartEngine {
    lines: Vec<CartLine>,
}

impl CartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection, merging into an existing line when the
    /// configuration signature matches.
    ///
    /// Quantity is coerced to >= 1. On a merge the existing line's
    /// modifiers and comment are kept; by signature construction they are
    /// identical to the incoming ones. Returns the affected line.
    pub fn add(&mut self, catalog: &Catalog, req: CartAdd) -> Result<&CartLine, CartError> {
        let product = catalog
            .product(&req.product_id)
            .ok_or_else(|| CartError::UnknownProduct(req.product_id.clone()))?;

        let modifiers: Vec<Modifier> = req
            .modifier_ids
            .iter()
            .map(|id| {
                catalog
                    .modifier(id)
                    .cloned()
                    .ok_or_else(|| CartError::UnknownModifier(id.clone()))
            })
            .collect::<Result<_, _>>()?;

        let quantity = req.quantity.max(1);
        let comment = req.comment.filter(|c| !c.is_empty());
        let signature =
            signature::generate_signature(&product.id, &req.modifier_ids, comment.as_deref());

        if let Some(idx) = self.lines.iter().position(|l| l.signature == signature) {
            self.lines[idx].quantity += quantity;
            tracing::debug!(
                line_id = %self.lines[idx].line_id,
                quantity = self.lines[idx].quantity,
                "Merged into existing cart line"
            );
            return Ok(&self.lines[idx]);
        }

        let line = CartLine {
            line_id: uuid::Uuid::new_v4().to_string(),
            signature,
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.price,
            quantity,
            modifiers,
            comment,
        };
        tracing::debug!(line_id = %line.line_id, product = %line.name, "Appended cart line");
        let idx = self.lines.len();
        self.lines.push(line);
        Ok(&self.lines[idx])
    }

    /// Delete a line by its identity token. No-op when absent.
    pub fn remove(&mut self, line_id: &str) {
        self.lines.retain(|l| l.line_id != line_id);
    }

    /// Empty the cart. Called automatically after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ (product price + Σ modifier deltas) * quantity
    pub fn total(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across all lines
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Snapshot the lines by value (checkout boundary)
    pub(crate) fn snapshot_lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ModifierAction, ModifierGroup, Product, SelectionRule};

    fn test_catalog() -> Catalog {
        let products = vec![
            Product::new("p1", "Гранд Биф", "Бургеры", 490),
            Product::new("p2", "Картофель Фри", "Снэки", 150),
        ];
        let groups = vec![ModifierGroup {
            id: "g1".to_string(),
            name: "Добавки".to_string(),
            selection: SelectionRule::AnyOf,
            options: vec![
                Modifier {
                    id: "m-cheese".to_string(),
                    name: "Сыр".to_string(),
                    price: 150,
                    action: ModifierAction::Add,
                },
                Modifier {
                    id: "m-bacon".to_string(),
                    name: "Бекон".to_string(),
                    price: 100,
                    action: ModifierAction::Add,
                },
                Modifier {
                    id: "m-no-onion".to_string(),
                    name: "Лук".to_string(),
                    price: 0,
                    action: ModifierAction::Remove,
                },
            ],
        }];
        Catalog::new(products, groups).unwrap()
    }

    #[test]
    fn identical_configurations_merge() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        cart.add(
            &catalog,
            CartAdd::product("p1").with_modifiers(vec!["m-no-onion".to_string()]),
        )
        .unwrap();
        cart.add(
            &catalog,
            CartAdd::product("p1")
                .with_modifiers(vec!["m-no-onion".to_string()])
                .with_quantity(2),
        )
        .unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn different_modifiers_or_comment_append() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        cart.add(&catalog, CartAdd::product("p1")).unwrap();
        cart.add(
            &catalog,
            CartAdd::product("p1").with_modifiers(vec!["m-cheese".to_string()]),
        )
        .unwrap();
        cart.add(&catalog, CartAdd::product("p1").with_comment("прожарка medium"))
            .unwrap();

        assert_eq!(cart.lines().len(), 3);
    }

    #[test]
    fn merge_keeps_existing_line_identity() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        let first_id = cart
            .add(&catalog, CartAdd::product("p2"))
            .unwrap()
            .line_id
            .clone();
        let merged_id = cart
            .add(&catalog, CartAdd::product("p2"))
            .unwrap()
            .line_id
            .clone();

        assert_eq!(first_id, merged_id);
    }

    #[test]
    fn quantity_is_coerced_to_at_least_one() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        cart.add(&catalog, CartAdd::product("p2").with_quantity(0))
            .unwrap();
        cart.add(&catalog, CartAdd::product("p1").with_quantity(-3))
            .unwrap();

        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn total_includes_modifier_deltas() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        // 490 + 150 cheese, quantity 2 -> 1280
        cart.add(
            &catalog,
            CartAdd::product("p1")
                .with_modifiers(vec!["m-cheese".to_string()])
                .with_quantity(2),
        )
        .unwrap();
        assert_eq!(cart.total(), 1280);

        cart.add(&catalog, CartAdd::product("p2")).unwrap();
        assert_eq!(cart.total(), 1430);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn unknown_references_are_rejected() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        let err = cart.add(&catalog, CartAdd::product("p99")).unwrap_err();
        assert!(matches!(err, CartError::UnknownProduct(id) if id == "p99"));

        let err = cart
            .add(
                &catalog,
                CartAdd::product("p1").with_modifiers(vec!["m-unknown".to_string()]),
            )
            .unwrap_err();
        assert!(matches!(err, CartError::UnknownModifier(id) if id == "m-unknown"));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_is_noop_for_unknown_line() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        let line_id = cart
            .add(&catalog, CartAdd::product("p1"))
            .unwrap()
            .line_id
            .clone();
        cart.remove("missing");
        assert_eq!(cart.lines().len(), 1);
        cart.remove(&line_id);
        assert!(cart.is_empty());
    }

    #[test]
    fn price_comes_from_catalog_not_caller() {
        let catalog = test_catalog();
        let mut cart = CartEngine::new();

        let line = cart.add(&catalog, CartAdd::product("p1")).unwrap();
        assert_eq!(line.unit_price, 490);
    }
}
