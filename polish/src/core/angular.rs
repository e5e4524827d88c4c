//! Rewrite rules for Angular component snippets.
//!
//! Angular snippets keep their CSS inside the decorator's `styles: [` ... `` `] ``
//! inline-styles array; structural rules anchor on that array's closing
//! backtick. Files without a styles array are left alone by those rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::catalog;
use crate::core::rule::Rule;

/// Canonical eased transition every snippet converges to.
const CANONICAL_TRANSITION: &str = "transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

/// Canonical two-layer elevation shadow.
const CANONICAL_SHADOW: &str =
    "box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07), 0 10px 20px rgba(0, 0, 0, 0.05)";

const BTN_HOVER: &str = r"    .btn:hover:not(:disabled) {
      transform: translateY(-2px);
      box-shadow: 0 8px 16px rgba(0, 0, 0, 0.15);
      filter: brightness(1.05);
    }";

const CARD_HOVER: &str = r"    .card:hover {
      transform: translateY(-4px);
      box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
    }";

pub const RULES: &[Rule] = &[
    Rule::new("angular/normalize-transitions", normalize_transitions),
    Rule::new("angular/insert-hover-states", insert_hover_states),
    Rule::new("angular/insert-keyframes", insert_keyframes),
    Rule::new("angular/normalize-shadows", normalize_shadows),
    Rule::new("angular/add-glass-effect", add_glass_effect),
];

/// Replace loose `transition: all <n>s ...` declarations with the canonical
/// eased curve.
///
/// The guard is per span, not per file: spans already containing
/// `cubic-bezier` are left alone, so files mixing canonical and plain
/// declarations converge in one pass and are stable afterwards.
fn normalize_transitions(text: &str) -> Option<String> {
    static TRANSITION_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"transition:\s*all\s+[\d.]+s[^;]*").unwrap());

    let replaced = TRANSITION_RE.replace_all(text, |caps: &regex::Captures| {
        let span = &caps[0];
        if span.contains("cubic-bezier") {
            span.to_string()
        } else {
            CANONICAL_TRANSITION.to_string()
        }
    });
    (replaced != text).then(|| replaced.into_owned())
}

/// Inject a hover block for button-like (`.btn`) or card-like (`.card`)
/// snippets that have no hover state yet. `.btn` wins when both markers are
/// present.
fn insert_hover_states(text: &str) -> Option<String> {
    if text.contains(":hover") {
        return None;
    }
    let block = if text.contains(".btn") {
        BTN_HOVER
    } else if text.contains(".card") {
        CARD_HOVER
    } else {
        return None;
    };
    insert_before_styles_close(text, &format!("\n{block}\n  "))
}

/// Inject the Angular keyframe bundle when the snippet has none.
fn insert_keyframes(text: &str) -> Option<String> {
    if text.contains("@keyframes") {
        return None;
    }
    insert_before_styles_close(text, &format!("\n{}\n  ", catalog::ANGULAR_BUNDLE))
}

/// Replace single-layer `box-shadow: 0 <a>px <b>px rgba(0, 0, 0, 0.<d>)`
/// declarations with the canonical two-layer elevation shadow.
///
/// A trailing comma means the span is the first layer of a multi-layer
/// shadow (the canonical form included); those are skipped, which keeps the
/// rule stable on its own output.
fn normalize_shadows(text: &str) -> Option<String> {
    static SHADOW_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"box-shadow:\s*0\s+\d+px\s+\d+px\s+rgba\(0,\s*0,\s*0,\s*0\.\d+\)(\s*,)?")
            .unwrap()
    });

    let replaced = SHADOW_RE.replace_all(text, |caps: &regex::Captures| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            CANONICAL_SHADOW.to_string()
        }
    });
    (replaced != text).then(|| replaced.into_owned())
}

/// Append a `backdropFilter` blur after every `backgroundColor` inline-style
/// property when none exists. The precondition checks for the exact token
/// the rule inserts so it is a no-op on its own output.
fn add_glass_effect(text: &str) -> Option<String> {
    if !text.contains("backgroundColor") || text.contains("backdropFilter") {
        return None;
    }
    static BG_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"backgroundColor:\s*'[^']*'").unwrap());

    let replaced = BG_RE.replace_all(text, |caps: &regex::Captures| {
        format!("{},\n        backdropFilter: 'blur(10px)'", &caps[0])
    });
    (replaced != text).then(|| replaced.into_owned())
}

/// Insert `insertion` before the closing `` `] `` of the decorator's
/// `styles: [` ... `` `] `` array. `None` when the snippet has no styles
/// array.
fn insert_before_styles_close(text: &str, insertion: &str) -> Option<String> {
    static STYLES_OPEN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"styles:\s*\[`").unwrap());

    let open = STYLES_OPEN_RE.find(text)?;
    let close = open.end() + text[open.end()..].find("`]")?;
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..close]);
    out.push_str(insertion);
    out.push_str(&text[close..]);
    Some(out)
}
