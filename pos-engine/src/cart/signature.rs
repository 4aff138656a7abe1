//! Configuration signatures - content-addressed cart line identity
//!
//! Two selections are "the same purchasable configuration" iff their
//! signatures are equal: a burger with "no onion" stacks with another
//! identical "no onion" burger, but never with a plain one or one carrying
//! a different comment.
//!
//! Canonical key format (stable contract):
//!
//! ```text
//! <product_id> 0x1F <modifier ids, sorted lexicographically, comma-joined> 0x1F <raw comment>
//! ```
//!
//! The signature is the hex encoding of the first 16 bytes of the SHA-256
//! of that key. Sorting the modifier ids makes the set order-irrelevant
//! without relying on deep equality of unordered collections.

use sha2::{Digest, Sha256};

const FIELD_SEP: char = '\u{1f}';

/// Canonical key for a selection (exposed for contract tests)
pub fn canonical_key(product_id: &str, modifier_ids: &[String], comment: Option<&str>) -> String {
    let mut ids: Vec<&str> = modifier_ids.iter().map(String::as_str).collect();
    ids.sort_unstable();
    format!(
        "{product_id}{FIELD_SEP}{}{FIELD_SEP}{}",
        ids.join(","),
        comment.unwrap_or("")
    )
}

/// Generate the configuration signature for a selection
pub fn generate_signature(
    product_id: &str,
    modifier_ids: &[String],
    comment: Option<&str>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_key(product_id, modifier_ids, comment).as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16]) // first 16 bytes for a shorter ID
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn modifier_order_is_irrelevant() {
        let a = generate_signature("p1", &ids(&["m2", "m1"]), None);
        let b = generate_signature("p1", &ids(&["m1", "m2"]), None);
        assert_eq!(a, b);
    }

    #[test]
    fn different_modifier_sets_differ() {
        let plain = generate_signature("p1", &[], None);
        let no_onion = generate_signature("p1", &ids(&["m-no-onion"]), None);
        assert_ne!(plain, no_onion);
    }

    #[test]
    fn comment_is_part_of_the_configuration() {
        let plain = generate_signature("p1", &[], None);
        let well_done = generate_signature("p1", &[], Some("well done"));
        assert_ne!(plain, well_done);
        // empty comment and no comment are the same intent
        assert_eq!(plain, generate_signature("p1", &[], Some("")));
    }

    #[test]
    fn products_never_collide_on_similar_keys() {
        // separator keeps ("p1", ["m1"]) distinct from ("p1m1", [])
        let a = generate_signature("p1", &ids(&["m1"]), None);
        let b = generate_signature("p1m1", &[], None);
        assert_ne!(a, b);
    }

    #[test]
    fn canonical_key_is_stable() {
        let key = canonical_key("p1", &ids(&["m2", "m1"]), Some("no ice"));
        assert_eq!(key, "p1\u{1f}m1,m2\u{1f}no ice");
    }
}
