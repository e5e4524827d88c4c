//! Test-only helpers for building snippet trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A temporary snippet corpus rooted in a tempdir.
pub struct SnippetTree {
    temp: tempfile::TempDir,
}

impl SnippetTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` at `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.temp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Read the file at `rel` back as UTF-8.
    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.temp.path().join(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

/// Deterministic snippet fixtures shared by unit and integration tests.
pub mod fixtures {
    /// Angular card missing hover states, keyframes, an eased transition,
    /// and carrying a single-layer shadow. Every Angular structural rule
    /// fires on it.
    pub const ANGULAR_CARD: &str = r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-card',
  template: `<div class="card"><ng-content></ng-content></div>`,
  styles: [`
    .card {
      border-radius: 8px;
      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
      transition: all 0.2s ease;
    }
  `]
})
export class CardComponent {}
"#;

    /// Plain React component sharing the Angular extensions; must stay
    /// byte-for-byte unchanged.
    pub const REACT_CARD: &str = r#"import React from 'react';

export function Card({ children }: { children: React.ReactNode }) {
  return <div className="card">{children}</div>;
}
"#;

    /// Vue button with a scoped style block and no enhancements yet.
    pub const VUE_BUTTON: &str = r#"<template>
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

    /// Vue snippet already carrying a transition, hover state, and
    /// keyframes; a run must leave it unchanged.
    pub const VUE_ENHANCED: &str = r#"<template>
  <button>{{ label }}</button>
</template>

<style scoped>
* {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
button:hover:not(:disabled) {
  transform: translateY(-2px) scale(1.02);
}
@keyframes enter {
  from { opacity: 0; }
  to { opacity: 1; }
}
</style>
"#;

    /// Svelte toggle with a plain style block.
    pub const SVELTE_TOGGLE: &str = r#"<script>
  export let on = false;
</script>

<label class="toggle">
  <input type="checkbox" bind:checked={on} />
  <span>{on ? 'On' : 'Off'}</span>
</label>

<style>
  .toggle {
    display: flex;
    gap: 8px;
  }
</style>
"#;
}
