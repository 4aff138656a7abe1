//! Modifier Model
//!
//! Modifiers are value objects attached to cart/order lines: two modifiers
//! are equal iff their ids are equal.

use serde::{Deserialize, Serialize};

/// What the modifier does to the base product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierAction {
    /// Extra ingredient, may carry an additive price
    #[default]
    Add,
    /// Ingredient exclusion, must be free (validated at catalog load)
    Remove,
}

/// A concrete selectable option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    /// Additive price delta in currency units (>= 0)
    pub price: i64,
    #[serde(default)]
    pub action: ModifierAction,
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Modifier {}

impl std::hash::Hash for Modifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Selection cardinality for a modifier group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionRule {
    /// Exactly one option must be selected (e.g. size)
    ExactlyOne,
    /// Zero or more options may be selected (e.g. add-ons, removals)
    #[default]
    AnyOf,
}

/// Modifier group (size, removals, add-ons)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selection: SelectionRule,
    pub options: Vec<Modifier>,
}

impl ModifierGroup {
    /// Check a selection against this group's cardinality rule.
    ///
    /// Ids not belonging to the group always fail; `ExactlyOne` requires
    /// exactly one selected option, `AnyOf` any subset.
    pub fn validate_selection(&self, selected: &[String]) -> bool {
        let known = selected
            .iter()
            .all(|id| self.options.iter().any(|o| &o.id == id));
        if !known {
            return false;
        }
        match self.selection {
            SelectionRule::ExactlyOne => selected.len() == 1,
            SelectionRule::AnyOf => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_group() -> ModifierGroup {
        ModifierGroup {
            id: "grp-size".to_string(),
            name: "Size".to_string(),
            selection: SelectionRule::ExactlyOne,
            options: vec![
                Modifier {
                    id: "m-std".to_string(),
                    name: "Standard".to_string(),
                    price: 0,
                    action: ModifierAction::Add,
                },
                Modifier {
                    id: "m-xl".to_string(),
                    name: "XL".to_string(),
                    price: 150,
                    action: ModifierAction::Add,
                },
            ],
        }
    }

    #[test]
    fn modifier_equality_is_by_id() {
        let a = Modifier {
            id: "m-1".to_string(),
            name: "Cheese".to_string(),
            price: 50,
            action: ModifierAction::Add,
        };
        let b = Modifier {
            id: "m-1".to_string(),
            name: "Extra Cheese".to_string(),
            price: 70,
            action: ModifierAction::Add,
        };
        assert_eq!(a, b);
    }

    #[test]
    fn exactly_one_requires_single_selection() {
        let group = size_group();
        assert!(group.validate_selection(&["m-xl".to_string()]));
        assert!(!group.validate_selection(&[]));
        assert!(!group.validate_selection(&["m-std".to_string(), "m-xl".to_string()]));
        assert!(!group.validate_selection(&["m-unknown".to_string()]));
    }

    #[test]
    fn any_of_accepts_subsets() {
        let mut group = size_group();
        group.selection = SelectionRule::AnyOf;
        assert!(group.validate_selection(&[]));
        assert!(group.validate_selection(&["m-std".to_string(), "m-xl".to_string()]));
    }
}
