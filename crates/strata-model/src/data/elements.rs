// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Domain declarations: profiles, enumerations, measures, classes,
//! associations, and functions.

use crate::data::expressions::{LambdaFunction, ValueSpecification, Variable};
use crate::data::multiplicity::Multiplicity;
use crate::data::{ElementInfo, StereotypePointer, TaggedValue};
use serde::{Deserialize, Serialize};

/// Profile: the declaration site for stereotypes and tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub info: ElementInfo,
    pub stereotypes: Vec<String>,
    pub tags: Vec<String>,
}

/// A single enumeration value, with its own annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub stereotypes: Vec<StereotypePointer>,
    pub tagged_values: Vec<TaggedValue>,
}

impl EnumValue {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stereotypes: Vec::new(),
            tagged_values: Vec::new(),
        }
    }
}

/// Enumeration declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    pub info: ElementInfo,
    pub values: Vec<EnumValue>,
}

/// Conversion attached to a non-canonical unit (`x -> $x * 1000`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    /// Name of the conversion lambda's sole parameter
    pub parameter: String,
    pub body: Vec<ValueSpecification>,
}

/// A unit owned by a measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub conversion: Option<UnitConversion>,
}

/// Measure: a canonical unit plus conversions for the others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub info: ElementInfo,
    pub canonical_unit: Option<Unit>,
    pub non_canonical_units: Vec<Unit>,
}

/// Plain property of a class or association end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// Declared type path
    pub class: String,
    pub multiplicity: Multiplicity,
    pub stereotypes: Vec<StereotypePointer>,
    pub tagged_values: Vec<TaggedValue>,
    /// Optional default value expression
    pub default_value: Option<ValueSpecification>,
}

impl Property {
    pub fn new(name: impl Into<String>, class: impl Into<String>, multiplicity: Multiplicity) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            multiplicity,
            stereotypes: Vec::new(),
            tagged_values: Vec::new(),
            default_value: None,
        }
    }
}

/// Derived property with parameters and a body
/// (`fullName() {$this.first + ' ' + $this.last}: String[1];`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedProperty {
    pub name: String,
    pub parameters: Vec<Variable>,
    pub body: Vec<ValueSpecification>,
    pub return_type: String,
    pub return_multiplicity: Multiplicity,
    pub stereotypes: Vec<StereotypePointer>,
    pub tagged_values: Vec<TaggedValue>,
}

/// Named class invariant (`[nonEmpty: $this.name->length() > 0]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    /// Zero-parameter predicate over `$this`
    pub function: LambdaFunction,
}

/// Class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub info: ElementInfo,
    /// Ordered superclass paths
    pub superclasses: Vec<String>,
    pub constraints: Vec<Constraint>,
    pub properties: Vec<Property>,
    pub qualified_properties: Vec<QualifiedProperty>,
}

/// Association: exactly two end properties, plus optional derived ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub info: ElementInfo,
    pub properties: Vec<Property>,
    pub qualified_properties: Vec<QualifiedProperty>,
}

/// Concrete function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteFunction {
    pub info: ElementInfo,
    pub parameters: Vec<Variable>,
    pub return_type: String,
    pub return_multiplicity: Multiplicity,
    pub body: Vec<ValueSpecification>,
}

/// Declaration kind owned by a plugin. Only the extension registry can
/// render it; the built-in renderers treat it as unsupported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionElement {
    pub info: ElementInfo,
    /// Kind label used by extension composers to claim the element
    pub kind: String,
}
