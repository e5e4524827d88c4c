//! Pure classification of snippet files into enhancement strategies.

use std::path::Path;

/// Extensions the walker admits; everything else is never visited.
pub const WALKED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "vue", "svelte"];

/// Decorator token that distinguishes Angular components from plain
/// TypeScript/JSX files sharing the same extensions.
const ANGULAR_MARKER: &str = "@Component";

/// Enhancement strategy chosen for one snippet file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Angular,
    Vue,
    Svelte,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Angular => "angular",
            Strategy::Vue => "vue",
            Strategy::Svelte => "svelte",
        }
    }
}

/// Classification outcome for a walked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Apply the strategy's rewrite rules.
    Enhance(Strategy),
    /// Leave the file byte-for-byte unchanged.
    PassThrough,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Enhance(strategy) => strategy.label(),
            Classification::PassThrough => "pass-through",
        }
    }
}

/// True if the path's extension is in the walked set.
pub fn is_walked_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WALKED_EXTENSIONS.contains(&ext))
}

/// Decide the enhancement strategy for a file from its extension and content.
///
/// - `ts`/`tsx`/`js`/`jsx` with the `@Component` decorator: Angular.
/// - `ts`/`tsx`/`js`/`jsx` without it: pass-through (plain React/TS files
///   are deliberately preserved unchanged).
/// - `vue` / `svelte`: their single-file-component strategies.
///
/// Pure function; no I/O.
pub fn classify(path: &Path, contents: &str) -> Classification {
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    match ext {
        "ts" | "tsx" | "js" | "jsx" => {
            if contents.contains(ANGULAR_MARKER) {
                Classification::Enhance(Strategy::Angular)
            } else {
                Classification::PassThrough
            }
        }
        "vue" => Classification::Enhance(Strategy::Vue),
        "svelte" => Classification::Enhance(Strategy::Svelte),
        _ => Classification::PassThrough,
    }
}
