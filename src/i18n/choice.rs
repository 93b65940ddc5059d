//! Pluralization rule fragments
//!
//! A choice template is a `|`-separated list of fragments. A fragment may
//! start with a condition in braces or brackets:
//!
//! | Fragment | Matches |
//! |----------|---------|
//! | `{1}one` / `[1]one` | `count == 1` |
//! | `[2,5]few` | `2 <= count <= 5` |
//! | `[6,*]many` | `count >= 6` |
//! | `[*,0]none` | `count <= 0` |
//!
//! Fragments without a condition are plain forms; when the last fragment
//! probed is plain, the singular/plural heuristic picks form 0 or 1.

use crate::dot::coerce::{parse_leading_int, parse_number};

/// Outcome of probing one fragment against a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMatch<'a> {
    /// The fragment carries no condition prefix
    NotRule,
    /// The condition does not hold for this count
    NoMatch,
    /// The condition holds; carries the text after the prefix
    Matched(&'a str),
}

/// Probe a single fragment.
pub fn match_choice_count(fragment: &str, count: i64) -> ChoiceMatch<'_> {
    let Some((condition, rest)) = split_condition(fragment) else {
        return ChoiceMatch::NotRule;
    };

    if condition.contains(',') {
        let mut bounds = condition.split(',');
        let from = bounds.next().unwrap_or_default();
        let to = bounds.next().unwrap_or_default();
        if in_range(from, to, count) {
            return ChoiceMatch::Matched(rest);
        }
    }

    match parse_leading_int(condition) {
        Some(exact) if exact == count => ChoiceMatch::Matched(rest),
        _ => ChoiceMatch::NoMatch,
    }
}

/// Pick the fragment of `template` for `count`.
///
/// The first matching fragment wins. When nothing matches and the last
/// fragment probed was plain, form 0 is used for `count <= 1` and form 1
/// otherwise. `None` when rule fragments were present but none held, or the
/// heuristic points past the last form.
///
/// ```
/// use blok::i18n::select_choice;
///
/// assert_eq!(select_choice("{1}one|[2,*]many", 1), Some("one"));
/// assert_eq!(select_choice("{1}one|[2,*]many", 5), Some("many"));
/// assert_eq!(select_choice("apple|apples", 2), Some("apples"));
/// ```
pub fn select_choice(template: &str, count: i64) -> Option<&str> {
    let parts: Vec<&str> = template.split('|').collect();

    let mut last = ChoiceMatch::NotRule;
    for &part in &parts {
        last = match_choice_count(part, count);
        log::trace!("Choice fragment {:?} for count {} -> {:?}", part, count, last);
        if let ChoiceMatch::Matched(fragment) = last {
            return Some(fragment);
        }
    }

    match last {
        ChoiceMatch::NotRule => {
            let index = if count > 1 { 1 } else { 0 };
            parts.get(index).copied()
        }
        _ => None,
    }
}

/// Split `{cond}rest` / `[cond]rest` into `(cond, rest)`.
///
/// The condition runs up to the first closing `}` or `]` and may not
/// contain another bracket. The rest is everything after the condition,
/// newlines included.
fn split_condition(fragment: &str) -> Option<(&str, &str)> {
    let body = fragment
        .strip_prefix('{')
        .or_else(|| fragment.strip_prefix('['))?;

    let close = body.find(&['[', ']', '{', '}'][..])?;
    match body.as_bytes()[close] {
        b'}' | b']' => Some((&body[..close], &body[close + 1..])),
        _ => None,
    }
}

fn in_range(from: &str, to: &str, count: i64) -> bool {
    let count = count as f64;
    let lower = parse_number(from);
    let upper = parse_number(to);

    (to == "*" && count >= lower)
        || (from == "*" && count <= upper)
        || (count >= lower && count <= upper)
}
