// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Strata grammar composer
//!
//! This crate takes a strata model tree and renders it to concrete DSL
//! syntax - the inverse of parsing. The composer is intentionally "dumb":
//! it pattern matches model nodes and emits corresponding text without
//! semantic analysis. Validation, tree repair, and element selection are
//! the caller's responsibility.

pub mod escape;
mod options;

mod composer;

// Rendering context and styles (from composer/context.rs)
pub use composer::context::{RenderContext, RenderStyle, UnsupportedConstruct};

// Composer configuration (from options.rs)
pub use options::ComposerOptions;

// Primitive rendering (from composer/literal_renderer.rs)
pub use composer::literal_renderer::render_multiplicity;

// Expression rendering (from composer/expression_renderer.rs)
pub use composer::expression_renderer::{render_lambda_body, render_value_specification};

// Element rendering (from composer/element_renderer.rs)
pub use composer::element_renderer::render_element;

// Extension registry (from composer/extension.rs)
pub use composer::extension::{ComposedSection, ComposerExtensions};

// Document assembly (from composer/document_renderer.rs)
pub use composer::document_renderer::{
    compose_document, compose_document_with_extensions, DEFAULT_PARSER,
};
