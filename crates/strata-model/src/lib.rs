// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Strata model tree
//!
//! This crate provides the typed model tree for the strata modeling language:
//! top-level declarations (classes, mappings, connections, runtimes, ...) and
//! the expression trees embedded in them. It does NOT render text - that
//! responsibility belongs to the composer crate (strata-grammar-composer).
//!
//! All nodes are constructed once by a loader/parser and treated as read-only
//! for the lifetime of a compose operation.

mod data;

// Shared declaration metadata (from data/mod.rs)
pub use data::{ElementInfo, StereotypePointer, TagPointer, TaggedValue};

// Top-level declarations (from data/elements.rs)
pub use data::elements::{
    Association, Class, ConcreteFunction, Constraint, EnumValue, Enumeration, ExtensionElement,
    Measure, Profile, Property, QualifiedProperty, Unit, UnitConversion,
};

// The element sum type (from data/mod.rs)
pub use data::Element;

// Expression trees (from data/expressions.rs)
pub use data::expressions::{
    AppliedFunction, AppliedProperty, GraphFetchTree, LambdaFunction, NavigationPath,
    ValueSpecification, Variable,
};

// Multiplicities (from data/multiplicity.rs)
pub use data::multiplicity::Multiplicity;

// Mappings (from data/mappings.rs)
pub use data::mappings::{
    AggregateView, AggregationAwareClassMapping, AssociationMapping, ClassMapping,
    EnumerationMapping, EnumValueMapping, EnumValueMappingSource, Mapping, MappingInclude,
    MappingTest, OperationClassMapping, PropertyMapping, PureInstanceClassMapping,
    PurePropertyMapping, TestAssertion, TestInputData, XStorePropertyMapping,
};

// Connections (from data/connections.rs)
pub use data::connections::{
    Connection, JsonModelConnection, ModelChainConnection, PackagedConnection, XmlModelConnection,
};

// Runtimes (from data/runtimes.rs)
pub use data::runtimes::{EngineRuntime, IdentifiedConnection, PackagedRuntime, StoreConnections};

// Embedded data (from data/data_elements.rs)
pub use data::data_elements::{DataElement, EmbeddedData, ModelStoreInstances};

// Sections (from data/sections.rs)
pub use data::sections::{Section, SectionIndex};
