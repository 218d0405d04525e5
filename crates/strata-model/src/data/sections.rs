// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Section descriptors: which sub-dialect ("parser") composes which
//! elements, and in what order.

use crate::data::ElementInfo;
use serde::{Deserialize, Serialize};

/// An ordered group of element paths composed by one dialect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Dialect name emitted as the `###Name` header
    pub parser: String,
    /// Import statements, in original order (duplicates allowed here,
    /// deduplicated at composition time)
    pub imports: Vec<String>,
    /// Paths of the elements the section claims, in order
    pub elements: Vec<String>,
}

impl Section {
    pub fn new(parser: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
            imports: Vec::new(),
            elements: Vec::new(),
        }
    }
}

/// The section layout of a composed document. Never rendered as text
/// itself; the document assembler consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionIndex {
    pub info: ElementInfo,
    pub sections: Vec<Section>,
}
