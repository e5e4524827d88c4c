//! Rewrite rules for Vue single-file components.
//!
//! Vue snippets carry a top-level `<style scoped>` block; insertion rules
//! anchor on the opening tag or the first `</style>` close.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::catalog;
use crate::core::rule::{Rule, insert_before};

const TRANSITION_BLOCK: &str = r"
* {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
";

const BUTTON_HOVER: &str = r"button:hover:not(:disabled) {
  transform: translateY(-2px) scale(1.02);
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
}
button:active:not(:disabled) {
  transform: translateY(0) scale(0.98);
}
";

pub const RULES: &[Rule] = &[
    Rule::new("vue/normalize-transitions", normalize_transitions),
    Rule::new("vue/insert-hover-states", insert_hover_states),
    Rule::new("vue/insert-keyframes", insert_keyframes),
];

/// Append a universal eased-transition block after the scoped style opening
/// tag when the snippet declares no transition at all.
fn normalize_transitions(text: &str) -> Option<String> {
    if text.contains("transition:") {
        return None;
    }
    static STYLE_SCOPED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<style[^>]*scoped[^>]*>").unwrap());

    let open = STYLE_SCOPED_RE.find(text)?;
    let mut out = String::with_capacity(text.len() + TRANSITION_BLOCK.len());
    out.push_str(&text[..open.end()]);
    out.push_str(TRANSITION_BLOCK);
    out.push_str(&text[open.end()..]);
    Some(out)
}

/// Inject button hover/active blocks before the style close for snippets
/// that render a button but have no hover state.
fn insert_hover_states(text: &str) -> Option<String> {
    if text.contains(":hover") || !text.contains("button") {
        return None;
    }
    insert_before(text, "</style>", BUTTON_HOVER)
}

/// Inject the Vue keyframe bundle when the snippet has none.
fn insert_keyframes(text: &str) -> Option<String> {
    if text.contains("@keyframes") {
        return None;
    }
    insert_before(text, "</style>", &format!("\n{}\n", catalog::VUE_BUNDLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::Strategy;
    use crate::core::rule::enhance;

    const BUTTON: &str = r#"<template>
  <button class="btn" :disabled="disabled">{{ label }}</button>
</template>

<script>
export default {
  name: 'BaseButton',
  props: { label: String, disabled: Boolean },
};
</script>

<style scoped>
button {
  padding: 8px 16px;
  border-radius: 6px;
}
</style>
"#;

    #[test]
    fn transitions_anchor_on_the_scoped_style_tag() {
        let out = normalize_transitions(BUTTON).expect("change");
        let style_at = out.find("<style scoped>").expect("style tag");
        let transition_at = out.find("transition:").expect("transition");
        assert!(transition_at > style_at);
        assert_eq!(normalize_transitions(&out), None);
    }

    #[test]
    fn transitions_skip_snippets_without_a_scoped_style() {
        assert_eq!(normalize_transitions("<template><button /></template>"), None);
    }

    #[test]
    fn hover_requires_a_button_marker() {
        let plain = "<style scoped>\np { color: red; }\n</style>";
        assert_eq!(insert_hover_states(plain), None);
    }

    #[test]
    fn hover_inserts_before_style_close_once() {
        let out = insert_hover_states(BUTTON).expect("change");
        assert!(out.contains("button:hover:not(:disabled)"));
        assert_eq!(insert_hover_states(&out), None);
    }

    #[test]
    fn keyframes_skip_when_already_present() {
        let enhanced = "<style scoped>\n@keyframes enter { }\n</style>";
        assert_eq!(insert_keyframes(enhanced), None);
    }

    #[test]
    fn composed_strategy_is_idempotent() {
        let (once, applied) = enhance(Strategy::Vue, BUTTON);
        assert_eq!(applied.len(), 3);
        assert!(once.contains("@keyframes enter"));
        let (twice, applied) = enhance(Strategy::Vue, &once);
        assert_eq!(once, twice);
        assert!(applied.is_empty());
    }

    #[test]
    fn fully_enhanced_snippet_is_untouched() {
        let enhanced = r#"<style scoped>
* { transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); }
button:hover:not(:disabled) { transform: scale(1.02); }
@keyframes enter { from { opacity: 0; } to { opacity: 1; } }
</style>"#;
        let (out, applied) = enhance(Strategy::Vue, enhanced);
        assert_eq!(out, enhanced);
        assert!(applied.is_empty());
    }
}
