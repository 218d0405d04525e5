// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! The composition engine - renders model trees to DSL syntax.
//!
//! One module per renderer family: context and styles, primitive
//! literals, expressions, elements (with mapping/connection/runtime/data
//! split out), the extension registry, and the document assembler.

pub mod connection_renderer;
pub mod context;
pub mod data_renderer;
pub mod document_renderer;
pub mod element_renderer;
pub mod expression_renderer;
pub mod extension;
pub mod literal_renderer;
pub mod mapping_renderer;
pub mod runtime_renderer;
