// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::composer::context::RenderStyle;
use serde::{Deserialize, Serialize};

/// Composer configuration.
///
/// Style and flags are configuration of the composer, not document data:
/// the same model composes differently under different options, but the
/// options never change mid-document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposerOptions {
    /// Output style (compact, indented, or display-annotated).
    pub style: RenderStyle,
    /// Fail composition when a construct has no rendering rule, instead of
    /// substituting an inline diagnostic marker. Off by default: the
    /// composer is frequently used for best-effort previews of partially
    /// supported models.
    pub strict: bool,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Standard,
            strict: false,
        }
    }
}

impl ComposerOptions {
    /// Options rendering with the given style, lenient
    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            style,
            strict: false,
        }
    }
}
