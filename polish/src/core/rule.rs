//! Guarded, idempotent rewrite rules and their composition.

use crate::core::classify::Strategy;

/// A guarded text rewrite: precondition + transform over plain text.
///
/// `apply` returns `None` when the precondition is unmet or the transform
/// left the text unchanged, so every rule is a no-op on text that already
/// satisfies its own postcondition.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    transform: fn(&str) -> Option<String>,
}

impl Rule {
    pub const fn new(name: &'static str, transform: fn(&str) -> Option<String>) -> Self {
        Self { name, transform }
    }

    /// Apply the rule once. `None` means no change.
    pub fn apply(&self, text: &str) -> Option<String> {
        (self.transform)(text)
    }
}

/// Ordered rule list for a strategy. Order matters: keyframe insertion runs
/// after the structural rules that determine its insertion point.
pub fn rules_for(strategy: Strategy) -> &'static [Rule] {
    match strategy {
        Strategy::Angular => crate::core::angular::RULES,
        Strategy::Vue => crate::core::vue::RULES,
        Strategy::Svelte => crate::core::svelte::RULES,
    }
}

/// Apply `rules` in order, each seeing the previous rule's output.
///
/// Returns the final text and the names of the rules that changed it.
pub fn apply_all(rules: &[Rule], text: &str) -> (String, Vec<&'static str>) {
    let mut current = text.to_string();
    let mut applied = Vec::new();
    for rule in rules {
        if let Some(next) = rule.apply(&current) {
            current = next;
            applied.push(rule.name);
        }
    }
    (current, applied)
}

/// Run the full strategy composition over `text`.
pub fn enhance(strategy: Strategy, text: &str) -> (String, Vec<&'static str>) {
    apply_all(rules_for(strategy), text)
}

/// Insert `insertion` immediately before the first occurrence of `needle`.
///
/// `None` when the anchor is absent; rules treat that as "no change".
pub(crate) fn insert_before(text: &str, needle: &str, insertion: &str) -> Option<String> {
    let at = text.find(needle)?;
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..at]);
    out.push_str(insertion);
    out.push_str(&text[at..]);
    Some(out)
}

/// Insert `insertion` immediately after the first occurrence of `needle`.
pub(crate) fn insert_after(text: &str, needle: &str, insertion: &str) -> Option<String> {
    let at = text.find(needle)? + needle.len();
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..at]);
    out.push_str(insertion);
    out.push_str(&text[at..]);
    Some(out)
}
