//! Product Model

use serde::{Deserialize, Serialize};

/// Nutrition facts (display-only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nutrients {
    pub proteins: i32,
    pub fats: i32,
    pub carbs: i32,
}

/// Product entity
///
/// Prices are whole currency units (rubles). `old_price`, when present,
/// is the struck-through reference price and must be greater than `price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category name (e.g. "Бургеры")
    pub category: String,
    /// Price in currency units
    pub price: i64,
    /// Struck-through reference price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Nutrients>,
    /// Display tags ("HIT", "NEW", ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

impl Product {
    /// Minimal constructor for tests and seed data
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            old_price: None,
            image: None,
            weight: None,
            calories: None,
            description: None,
            nutrients: None,
            badges: Vec::new(),
        }
    }
}
