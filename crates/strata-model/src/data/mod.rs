// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub mod connections;
pub mod data_elements;
pub mod elements;
pub mod expressions;
pub mod mappings;
pub mod multiplicity;
pub mod runtimes;
pub mod sections;

// ============================================================================
// Declaration metadata
// ============================================================================

/// Reference to a stereotype declared in a profile (e.g. `doc.deprecated`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StereotypePointer {
    /// Full path of the owning profile
    pub profile: String,
    /// Stereotype name within the profile
    pub value: String,
}

/// Reference to a tag declared in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagPointer {
    /// Full path of the owning profile
    pub profile: String,
    /// Tag name within the profile
    pub value: String,
}

/// A tag paired with its string value (e.g. `{doc.doc = 'a person'}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedValue {
    pub tag: TagPointer,
    pub value: String,
}

/// Metadata carried by every top-level declaration: the package-qualified
/// path plus its annotations, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Package-qualified path, `::`-separated (e.g. `model::domain::Person`)
    pub path: String,
    pub stereotypes: Vec<StereotypePointer>,
    pub tagged_values: Vec<TaggedValue>,
}

impl ElementInfo {
    /// Info with a path and no annotations
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            stereotypes: Vec::new(),
            tagged_values: Vec::new(),
        }
    }

    /// Last path segment (the element's simple name)
    pub fn name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }
}

// ============================================================================
// The element sum type
// ============================================================================

/// A top-level named declaration in a strata model.
///
/// Closed sum: the composer dispatches on this exhaustively, so adding a
/// variant is a compile-time-checked event across all renderers. Kinds that
/// only exist through plugins go through `Extension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Profile(elements::Profile),
    Enumeration(elements::Enumeration),
    Measure(elements::Measure),
    Class(elements::Class),
    Association(elements::Association),
    Function(elements::ConcreteFunction),
    Mapping(mappings::Mapping),
    Connection(connections::PackagedConnection),
    Runtime(runtimes::PackagedRuntime),
    DataElement(data_elements::DataElement),
    SectionIndex(sections::SectionIndex),
    Extension(elements::ExtensionElement),
}

impl Element {
    /// Shared metadata of the declaration, whatever its kind
    pub fn info(&self) -> &ElementInfo {
        match self {
            Element::Profile(e) => &e.info,
            Element::Enumeration(e) => &e.info,
            Element::Measure(e) => &e.info,
            Element::Class(e) => &e.info,
            Element::Association(e) => &e.info,
            Element::Function(e) => &e.info,
            Element::Mapping(e) => &e.info,
            Element::Connection(e) => &e.info,
            Element::Runtime(e) => &e.info,
            Element::DataElement(e) => &e.info,
            Element::SectionIndex(e) => &e.info,
            Element::Extension(e) => &e.info,
        }
    }

    /// Package-qualified path of the declaration
    pub fn path(&self) -> &str {
        &self.info().path
    }
}
