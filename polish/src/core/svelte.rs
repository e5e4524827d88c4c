//! Rewrite rules for Svelte single-file components.

use crate::core::catalog;
use crate::core::rule::{Rule, insert_after, insert_before};

const TRANSITION_BLOCK: &str = r"
  * {
    transition: all 0.25s ease-out;
  }
";

pub const RULES: &[Rule] = &[
    Rule::new("svelte/normalize-transitions", normalize_transitions),
    Rule::new("svelte/insert-keyframes", insert_keyframes),
];

/// Append a universal ease-out transition block after `<style>` when the
/// snippet declares no transition at all.
fn normalize_transitions(text: &str) -> Option<String> {
    if text.contains("transition:") {
        return None;
    }
    insert_after(text, "<style>", TRANSITION_BLOCK)
}

/// Inject the Svelte keyframe bundle when the snippet has none.
fn insert_keyframes(text: &str) -> Option<String> {
    if text.contains("@keyframes") {
        return None;
    }
    insert_before(text, "</style>", &format!("\n{}\n", catalog::SVELTE_BUNDLE))
}
