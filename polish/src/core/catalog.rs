//! Static keyframe bundles injected by the keyframe-insertion rules.
//!
//! One bundle per framework; indentation matches the surrounding style block
//! each bundle is inserted into (Angular inline-styles arrays are indented,
//! Vue/Svelte top-level style blocks are not).

/// fadeIn, slideIn, scaleIn.
pub const ANGULAR_BUNDLE: &str = r"    @keyframes fadeIn {
      from { opacity: 0; transform: translateY(10px); }
      to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideIn {
      from { transform: translateX(-20px); opacity: 0; }
      to { transform: translateX(0); opacity: 1; }
    }
    @keyframes scaleIn {
      from { transform: scale(0.95); opacity: 0; }
      to { transform: scale(1); opacity: 1; }
    }";

/// enter, slideDown, glow.
pub const VUE_BUNDLE: &str = r"@keyframes enter {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}
@keyframes slideDown {
  from { transform: translateY(-10px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}
@keyframes glow {
  0%, 100% { box-shadow: 0 0 5px currentColor; }
  50% { box-shadow: 0 0 20px currentColor; }
}";

/// fade, expand.
pub const SVELTE_BUNDLE: &str = r"@keyframes fade {
  from { opacity: 0; }
  to { opacity: 1; }
}
@keyframes expand {
  from { transform: scale(0.9); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_contains_keyframes_blocks() {
        // The keyframe-insertion preconditions key on this token; a bundle
        // without it would be re-inserted on every run.
        for bundle in [ANGULAR_BUNDLE, VUE_BUNDLE, SVELTE_BUNDLE] {
            assert!(bundle.contains("@keyframes"));
        }
    }
}
