// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Rendering context - immutable configuration threaded through rendering.
//!
//! Contexts are derived by value (`with_*` methods), never mutated in
//! place, so sibling recursive calls can never observe each other's
//! settings. The only shared state is the diagnostic channel, which is
//! append-only and local to one compose call.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One indentation unit in the concrete syntax
pub const INDENT_UNIT: &str = "  ";

/// Output mode controlling whitespace, line breaks, and annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStyle {
    /// Compact machine-facing output; indentation deltas are ignored
    /// unless explicitly forced
    Standard,
    /// Indented human-facing output
    Pretty,
    /// Indented output annotated with HTML markers, for display only -
    /// the result is not meant to be re-parsed
    PrettyHtml,
}

/// Record of a node that had no rendering rule anywhere (built-in
/// renderers and extension registry both missed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedConstruct {
    /// Construct family ("value specification", "element", ...)
    pub family: &'static str,
    /// Kind label of the unrenderable node
    pub kind: String,
}

/// Rendering context - holds everything renderers consult for style
/// decisions.
#[derive(Debug, Clone)]
pub struct RenderContext {
    indentation: String,
    style: RenderStyle,
    /// Render literals as raw external parameter values: strings
    /// unquoted and unescaped, date/time literals without their prefix
    /// marker
    value_as_parameter_value: bool,
    /// Render variables as signature parameter declarations: no sigil,
    /// declared type and multiplicity included
    variable_in_signature: bool,
    /// Legacy alternate rendering for properties of the mapping-source
    /// receiver (`$src['name']` instead of `$src.name`)
    property_bracket_expression: bool,
    diagnostics: Rc<RefCell<Vec<UnsupportedConstruct>>>,
}

impl RenderContext {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            indentation: String::new(),
            style,
            value_as_parameter_value: false,
            variable_in_signature: false,
            property_bracket_expression: false,
            diagnostics: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Current indentation prefix
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    pub fn is_parameter_value(&self) -> bool {
        self.value_as_parameter_value
    }

    pub fn is_variable_in_signature(&self) -> bool {
        self.variable_in_signature
    }

    pub fn is_property_bracket_expression(&self) -> bool {
        self.property_bracket_expression
    }

    /// True for the indented styles
    pub fn is_pretty(&self) -> bool {
        matches!(self.style, RenderStyle::Pretty | RenderStyle::PrettyHtml)
    }

    // ------------------------------------------------------------------
    // Derivations
    // ------------------------------------------------------------------

    /// Context with indentation increased by `units`. Honored only in the
    /// pretty styles; a no-op under `Standard`.
    pub fn indented(&self, units: usize) -> Self {
        if self.is_pretty() {
            self.indented_always(units)
        } else {
            self.clone()
        }
    }

    /// Context with indentation increased by `units` regardless of style.
    pub fn indented_always(&self, units: usize) -> Self {
        let mut derived = self.clone();
        derived.indentation.push_str(&INDENT_UNIT.repeat(units));
        derived
    }

    pub fn with_parameter_value(&self, value: bool) -> Self {
        let mut derived = self.clone();
        derived.value_as_parameter_value = value;
        derived
    }

    pub fn with_variable_in_signature(&self, value: bool) -> Self {
        let mut derived = self.clone();
        derived.variable_in_signature = value;
        derived
    }

    pub fn with_property_bracket_expression(&self, value: bool) -> Self {
        let mut derived = self.clone();
        derived.property_bracket_expression = value;
        derived
    }

    // ------------------------------------------------------------------
    // Style helpers
    // ------------------------------------------------------------------

    /// The line-break token for this style
    pub fn newline(&self) -> &'static str {
        match self.style {
            RenderStyle::Standard | RenderStyle::Pretty => "\n",
            RenderStyle::PrettyHtml => "</br>\n",
        }
    }

    /// A line break followed by the current indentation prefix
    pub fn break_line(&self) -> String {
        format!("{}{}", self.newline(), self.indentation)
    }

    /// Wrap a grammar keyword in its display annotation (identity outside
    /// the annotated style)
    pub fn keyword(&self, word: &str) -> String {
        match self.style {
            RenderStyle::PrettyHtml => {
                format!("<span class='strataGrammar-keyword'>{}</span>", word)
            }
            _ => word.to_string(),
        }
    }

    /// Wrap an element name in its display annotation (identity outside
    /// the annotated style)
    pub fn element_name(&self, name: &str) -> String {
        match self.style {
            RenderStyle::PrettyHtml => {
                format!("<span class='strataGrammar-elementName'>{}</span>", name)
            }
            _ => name.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Record a node with no rendering rule and return the inline marker
    /// substituted at the point where it would have appeared.
    pub fn record_unsupported(&self, family: &'static str, kind: &str) -> String {
        self.diagnostics.borrow_mut().push(UnsupportedConstruct {
            family,
            kind: kind.to_string(),
        });
        format!("/* Unsupported {}: {} */", family, kind)
    }

    /// All unsupported constructs observed through this context (or any
    /// context derived from it) so far.
    pub fn unsupported_constructs(&self) -> Vec<UnsupportedConstruct> {
        self.diagnostics.borrow().clone()
    }
}
