//! Property-based invariant tests for the translation store and dot paths.
//!
//! 1. Interpolation of a template without `:` is the identity
//! 2. `{n}` fragments match exactly `count == n`
//! 3. `[a,b]` fragments match exactly `a <= count <= b`
//! 4. Plain two-form templates follow the singular/plural heuristic
//! 5. Text without `&` survives HTML decoding unchanged
//! 6. `add` then `get` returns the added message verbatim
//! 7. A miss returns the key and records it exactly once per lookup
//! 8. `set` then `get` on a top-level key returns the assigned value
//! 9. `where_cmp(">")` keeps exactly the entries above the threshold, in order

use blok::dot::DotObject;
use blok::i18n::{
    decode_html, match_choice_count, replace_string, select_choice, ChoiceMatch, LocaleMessages,
    Replacements, Translator,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// ── Helpers ──────────────────────────────────────────────────────────

fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?]{0,24}"
}

fn message_key() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,10}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Interpolation without placeholders is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_without_placeholder_is_identity(
        template in plain_text(),
        key in message_key(),
        value in plain_text(),
    ) {
        let data = Replacements::new().with(key, value);
        prop_assert_eq!(replace_string(&template, &data), template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Exact fragments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exact_fragment_matches_only_its_count(n in -1000i64..1000, count in -1000i64..1000) {
        let fragment = format!("{{{}}}text", n);
        let outcome = match_choice_count(&fragment, count);
        if n == count {
            prop_assert_eq!(outcome, ChoiceMatch::Matched("text"));
        } else {
            prop_assert_eq!(outcome, ChoiceMatch::NoMatch);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Range fragments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_fragment_matches_inclusive_bounds(
        from in -500i64..500,
        width in 0i64..500,
        count in -1000i64..1000,
    ) {
        let to = from + width;
        let fragment = format!("[{},{}]in", from, to);
        let matched = matches!(match_choice_count(&fragment, count), ChoiceMatch::Matched("in"));
        prop_assert_eq!(matched, from <= count && count <= to);
    }

    #[test]
    fn open_ranges(bound in -500i64..500, count in -1000i64..1000) {
        let at_least = format!("[{},*]up", bound);
        let at_most = format!("[*,{}]down", bound);
        prop_assert_eq!(
            matches!(match_choice_count(&at_least, count), ChoiceMatch::Matched(_)),
            count >= bound
        );
        prop_assert_eq!(
            matches!(match_choice_count(&at_most, count), ChoiceMatch::Matched(_)),
            count <= bound
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Singular/plural heuristic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_forms_follow_count(count in any::<i64>()) {
        let expected = if count > 1 { "many" } else { "one" };
        prop_assert_eq!(select_choice("one|many", count), Some(expected));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. HTML decoding leaves entity-free text alone
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_without_ampersand_is_identity(text in "[^&]{0,40}") {
        prop_assert_eq!(decode_html(&text), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Translator round trip and miss recording
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_then_get_returns_message(key in message_key(), message in plain_text()) {
        let mut i18n = Translator::new(LocaleMessages::new(), "en");
        let mut added = LocaleMessages::new();
        added.insert(key.clone(), Value::String(message.clone()));
        i18n.add(added, None);

        prop_assert_eq!(i18n.get(&key, None, None), message);
        prop_assert!(i18n.missing_keys().is_empty());
    }

    #[test]
    fn miss_returns_key_once_per_lookup(key in message_key(), lookups in 1usize..5) {
        let i18n = Translator::new(LocaleMessages::new(), "en");
        for _ in 0..lookups {
            prop_assert_eq!(i18n.get(&key, None, None), key.clone());
        }
        let missing = i18n.missing_keys();
        prop_assert_eq!(missing.len(), lookups);
        prop_assert!(missing.iter().all(|k| *k == key));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8-9. Dot paths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_then_get_top_level(key in message_key(), value in any::<i64>()) {
        let mut dot = DotObject::new(json!({}));
        dot.set(&key, json!(value)).unwrap();
        prop_assert_eq!(dot.get(&key), Some(&json!(value)));
        prop_assert!(dot.has(&key));
    }

    #[test]
    fn where_greater_preserves_order(
        prices in proptest::collection::vec(0i64..1000, 0..20),
        threshold in 0i64..1000,
    ) {
        let items: Vec<Value> = prices
            .iter()
            .enumerate()
            .map(|(id, price)| json!({"id": id, "price": price}))
            .collect();
        let dot = DotObject::new(Value::Array(items));

        let kept: Vec<i64> = dot
            .where_cmp("price", ">", &json!(threshold))
            .into_iter()
            .filter_map(|item| item["price"].as_i64())
            .collect();
        let expected: Vec<i64> = prices.into_iter().filter(|p| *p > threshold).collect();
        prop_assert_eq!(kept, expected);
    }
}
