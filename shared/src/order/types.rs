//! Cart line and checkout input types

use crate::models::Modifier;
use serde::{Deserialize, Serialize};

/// A priced line in the cart (and, frozen, in a placed order)
///
/// `line_id` is an opaque identity token used only for UI addressing and
/// never participates in equality. `signature` is the content-addressed
/// configuration key that drives merge-vs-append (see the cart engine).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Opaque per-line identity token
    pub line_id: String,
    /// Configuration signature (product + modifier set + comment)
    pub signature: String,
    /// Product reference
    pub product_id: String,
    /// Product name snapshot
    pub name: String,
    /// Category name snapshot
    pub category: String,
    /// Base unit price in currency units
    pub unit_price: i64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CartLine {
    /// Unit price including modifier deltas
    pub fn effective_unit_price(&self) -> i64 {
        self.unit_price + self.modifiers.iter().map(|m| m.price).sum::<i64>()
    }

    /// Line total: (base price + modifier deltas) * quantity
    pub fn line_total(&self) -> i64 {
        self.effective_unit_price() * self.quantity as i64
    }
}

/// Cart add request - one product configuration selected by a shopper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartAdd {
    /// Product reference
    pub product_id: String,
    /// Selected modifier ids (order-irrelevant)
    #[serde(default)]
    pub modifier_ids: Vec<String>,
    /// Free-text instruction for the kitchen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Coerced to >= 1 by the cart engine
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl CartAdd {
    /// Plain add with no modifiers, no comment, quantity 1
    pub fn product(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            modifier_ids: Vec::new(),
            comment: None,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_modifiers(mut self, modifier_ids: Vec<String>) -> Self {
        self.modifier_ids = modifier_ids;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// How the customer intends to pay (recorded, never processed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

/// Checkout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// VIP flag
    #[serde(default)]
    pub priority: bool,
    /// Display-only allergy warnings for the kitchen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
}

impl PlaceOrder {
    pub fn new(customer_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            table_number: None,
            payment_method: PaymentMethod::default(),
            priority: false,
            allergies: Vec::new(),
        }
    }

    pub fn at_table(mut self, table_number: impl Into<String>) -> Self {
        self.table_number = Some(table_number.into());
        self
    }
}
