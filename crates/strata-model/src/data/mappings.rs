// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Mapping declarations: class mappings, association mappings, enumeration
//! mappings, and the legacy embedded test suites.

use crate::data::expressions::LambdaFunction;
use crate::data::ElementInfo;
use serde::{Deserialize, Serialize};

/// Mapping declaration: an ordered body of includes, class mappings,
/// association mappings, enumeration mappings, and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub info: ElementInfo,
    pub includes: Vec<MappingInclude>,
    pub class_mappings: Vec<ClassMapping>,
    pub association_mappings: Vec<AssociationMapping>,
    pub enumeration_mappings: Vec<EnumerationMapping>,
    pub tests: Vec<MappingTest>,
}

/// Include of another mapping, with optional store substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingInclude {
    pub included: String,
    pub source_store: Option<String>,
    pub target_store: Option<String>,
}

/// How a class is mapped. Each kind owns property mappings mirroring its
/// own shape; kinds added by plugins go through `Extension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMapping {
    Operation(OperationClassMapping),
    PureInstance(PureInstanceClassMapping),
    AggregationAware(AggregationAwareClassMapping),
    Extension {
        kind: String,
        class: String,
        id: Option<String>,
        root: bool,
    },
}

impl ClassMapping {
    /// Target class path of the mapping
    pub fn class(&self) -> &str {
        match self {
            ClassMapping::Operation(m) => &m.class,
            ClassMapping::PureInstance(m) => &m.class,
            ClassMapping::AggregationAware(m) => &m.class,
            ClassMapping::Extension { class, .. } => class,
        }
    }
}

/// Class mapping defined as an operation over other set implementations
/// (union, inheritance, merge)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationClassMapping {
    pub class: String,
    pub id: Option<String>,
    pub root: bool,
    /// Operation function name (e.g. `meta::pure::router::operations::union`)
    pub operation: String,
    /// Ids of the operand set implementations
    pub parameters: Vec<String>,
}

/// Model-to-model class mapping with per-property transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PureInstanceClassMapping {
    pub class: String,
    pub id: Option<String>,
    pub root: bool,
    /// Source class path (`~src`)
    pub source: Option<String>,
    /// Row filter predicate (`~filter`)
    pub filter: Option<LambdaFunction>,
    pub property_mappings: Vec<PropertyMapping>,
}

/// One aggregate view of an aggregation-aware mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateView {
    /// Whether the view can be used for non-aggregated queries
    pub can_aggregate: bool,
    pub group_by_functions: Vec<LambdaFunction>,
    pub aggregate_values: Vec<LambdaFunction>,
    pub mapping: Box<ClassMapping>,
}

/// Class mapping that routes between a main mapping and pre-aggregated views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationAwareClassMapping {
    pub class: String,
    pub id: Option<String>,
    pub root: bool,
    pub views: Vec<AggregateView>,
    pub main_mapping: Box<ClassMapping>,
}

/// Property mapping, mirroring the kind of its owning class mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyMapping {
    Pure(PurePropertyMapping),
    Extension {
        kind: String,
        property: String,
    },
}

/// Per-property transform of a model-to-model mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurePropertyMapping {
    pub property: String,
    /// Target set-implementation id, when the property points at a class
    /// mapped more than once
    pub target: Option<String>,
    pub transform: LambdaFunction,
    /// Enumeration-mapping id applied to the transform result
    pub enumeration_mapping: Option<String>,
}

/// Cross-store association mapping; each end is mapped by an expression
/// relating the two sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationMapping {
    pub association: String,
    pub id: Option<String>,
    pub stores: Vec<String>,
    pub property_mappings: Vec<XStorePropertyMapping>,
}

/// One end of a cross-store association mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XStorePropertyMapping {
    pub property: String,
    pub source_id: Option<String>,
    pub target_id: Option<String>,
    pub cross_expression: LambdaFunction,
}

/// Source value an enumeration value is mapped from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnumValueMappingSource {
    String(String),
    Integer(i64),
    /// Value of another enumeration (`enumeration.VALUE`)
    Enum { enumeration: String, value: String },
}

/// One target enumeration value with its ordered source values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueMapping {
    pub value: String,
    pub sources: Vec<EnumValueMappingSource>,
}

/// Enumeration mapping block inside a mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationMapping {
    pub enumeration: String,
    pub id: Option<String>,
    pub value_mappings: Vec<EnumValueMapping>,
}

/// Input data fed to a legacy mapping test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestInputData {
    pub source_class: String,
    /// Serialized instance data
    pub data: String,
    /// Input format label (e.g. `JSON`)
    pub format: String,
}

/// Expected outcome of a mapping test. Kinds beyond the built-in expected
/// output go through the test-assertion extension composers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestAssertion {
    ExpectedOutput(String),
    Extension { kind: String, content: String },
}

/// Legacy embedded mapping test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingTest {
    pub name: String,
    pub query: LambdaFunction,
    pub input_data: Vec<TestInputData>,
    pub assertion: TestAssertion,
}
