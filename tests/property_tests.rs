//! Property-based tests for core domain types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;
use serde_json::{json, Value};

use stylebook::core::store::TokenStore;
use stylebook::core::types::{Fingerprint, Origin, Scope, Token, TokenCategory};

/// Strategy for token records: (slug, color) pairs.
fn records() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-z0-9-]{0,12}", "#[0-9a-f]{6}"), 0..5)
}

/// Build a document whose palette holds the given origin groups, in order.
fn palette_document(groups: &[(&str, &[(String, String)])]) -> Value {
    let mut palette = serde_json::Map::new();
    for (origin, records) in groups {
        let array = records
            .iter()
            .map(|(slug, color)| json!({ "slug": slug, "color": color }))
            .collect();
        palette.insert((*origin).to_string(), Value::Array(array));
    }
    json!({ "settings": { "color": { "palette": palette } } })
}

fn group_slugs(groups: &[&[(String, String)]]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|records| records.iter().map(|(slug, _)| slug.clone()))
        .collect()
}

proptest! {
    /// Flattening concatenates priority groups first, extras after, and
    /// never drops or reorders records within a group.
    #[test]
    fn flatten_concatenates_groups_in_priority_order(
        theme in records(),
        custom in records(),
        default in records(),
        vendor in records(),
    ) {
        let doc = palette_document(&[
            ("vendor", &vendor),
            ("default", &default),
            ("custom", &custom),
            ("theme", &theme),
        ]);
        let store = TokenStore::from_value(doc);

        let colors = store.colors(Scope::All);
        let got: Vec<String> = colors.iter().map(|t| t.slug.clone()).collect();
        let expected = group_slugs(&[&theme, &custom, &default, &vendor]);
        prop_assert_eq!(got, expected);
    }

    /// Theme scope returns exactly the theme group.
    #[test]
    fn theme_scope_selects_the_theme_group(
        theme in records(),
        default in records(),
    ) {
        let doc = palette_document(&[("theme", &theme), ("default", &default)]);
        let store = TokenStore::from_value(doc);

        let colors = store.colors(Scope::ThemeOnly);
        prop_assert_eq!(colors.len(), theme.len());
        for (token, (slug, color)) in colors.iter().zip(&theme) {
            prop_assert_eq!(&token.slug, slug);
            prop_assert_eq!(&token.value, color);
            prop_assert_eq!(&token.origin, &Origin::Theme);
        }
    }

    /// Repeated queries return identical results.
    #[test]
    fn queries_are_stable(theme in records(), custom in records()) {
        let doc = palette_document(&[("theme", &theme), ("custom", &custom)]);
        let store = TokenStore::from_value(doc);

        prop_assert_eq!(store.colors(Scope::All), store.colors(Scope::All));
    }

    /// A derived display name capitalizes the first character and turns
    /// hyphens into spaces; nothing else changes for ASCII slugs.
    #[test]
    fn derived_names_have_the_expected_shape(slug in "[a-z][a-z0-9-]{0,12}") {
        let token = Token::new(slug.clone(), "#000000", None, Origin::Theme);

        let mut expected = slug.replace('-', " ");
        expected.replace_range(0..1, &slug[0..1].to_uppercase());
        prop_assert_eq!(token.name, expected);
    }

    /// Explicit names are never rewritten.
    #[test]
    fn explicit_names_pass_through(slug in "[a-z][a-z-]{0,12}", name in "[A-Za-z ]{1,20}") {
        let token = Token::new(slug, "#000000", Some(name.clone()), Origin::Theme);
        prop_assert_eq!(token.name, name);
    }

    /// Any origin round-trips through serde, including unknown keys.
    #[test]
    fn origin_serde_roundtrip(key in "[a-z][a-z-]{0,15}") {
        let origin = Origin::from_key(&key);
        let json = serde_json::to_string(&origin).unwrap();
        let parsed: Origin = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(origin, parsed);
    }

    /// CSS custom property names follow the preset convention.
    #[test]
    fn css_var_follows_the_preset_convention(slug in "[a-z][a-z0-9-]{0,12}") {
        for category in [
            TokenCategory::Color,
            TokenCategory::Gradient,
            TokenCategory::FontSize,
            TokenCategory::FontFamily,
            TokenCategory::Spacing,
            TokenCategory::Shadow,
        ] {
            let var = category.css_var(&slug);
            prop_assert!(var.starts_with("--preset-"));
            prop_assert!(var.ends_with(&slug));
            prop_assert!(var.contains(category.as_str()));
        }
    }

    /// Fingerprints are deterministic for the same chunk sequence.
    #[test]
    fn fingerprint_deterministic(chunks in prop::collection::vec("[a-z0-9]{0,16}", 1..6)) {
        let a = Fingerprint::compute(chunks.iter());
        let b = Fingerprint::compute(chunks.iter());
        prop_assert_eq!(a, b);
    }

    /// Swapping two distinct chunks changes the fingerprint.
    #[test]
    fn fingerprint_is_order_sensitive(chunks in prop::collection::vec("[a-z0-9]{1,16}", 2..6)) {
        prop_assume!(chunks[0] != chunks[1]);

        let mut swapped = chunks.clone();
        swapped.swap(0, 1);

        let original = Fingerprint::compute(chunks.iter());
        let reordered = Fingerprint::compute(swapped.iter());
        prop_assert_ne!(original, reordered);
    }
}
