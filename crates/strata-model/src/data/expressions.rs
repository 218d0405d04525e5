// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::multiplicity::Multiplicity;
use num::BigInt;
use serde::{Deserialize, Serialize};

/// A node in an expression tree embedded in a declaration (a property
/// default, a constraint predicate, a function body, a mapping transform).
///
/// Strictly tree-shaped: children are owned, there are no cycles and no
/// sharing between siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueSpecification {
    /// String literal (raw, unescaped value)
    String(String),

    /// Integer literal with arbitrary precision
    Integer(BigInt),

    /// Float literal
    Float(f64),

    /// Decimal literal, kept in its source textual form (no `D` suffix)
    Decimal(String),

    /// Boolean literal
    Boolean(bool),

    /// Date-time literal, e.g. `2023-01-01T10:00:00` (prefix marker optional)
    DateTime(String),

    /// Date-only literal, e.g. `2023-01-01`
    StrictDate(String),

    /// Time-only literal, e.g. `10:00:00`
    StrictTime(String),

    /// The "latest date" sentinel used by temporal queries
    LatestDate,

    /// Ordered sequence of values with the multiplicity declared for the
    /// surrounding usage (the declared bound drives bracket rendering)
    Collection {
        multiplicity: Multiplicity,
        values: Vec<ValueSpecification>,
    },

    /// Variable reference or declaration
    Variable(Variable),

    /// Lambda with an ordered parameter list and an ordered body sequence
    Lambda(LambdaFunction),

    /// Function application (named function + ordered parameters)
    AppliedFunction(AppliedFunction),

    /// Property access on a receiver, optionally with extra parameters
    /// (the qualified-property form)
    AppliedProperty(AppliedProperty),

    /// Navigation path (`#/Start/a/b#`)
    Path(NavigationPath),

    /// Graph-fetch tree (`#{Type {a, b}}#`)
    GraphFetch(GraphFetchTree),

    /// Key/value pair, used by instance-literal key expressions
    Pair {
        first: Box<ValueSpecification>,
        second: Box<ValueSpecification>,
    },

    /// Unit instance, e.g. `5 Mass~Gram`
    UnitInstance {
        unit: String,
        value: Box<ValueSpecification>,
    },

    /// Unit type reference, e.g. `Mass~Gram`
    UnitType(String),

    /// Pointer to a packageable element by path
    ElementPointer(String),

    /// Catch-all for expression kinds this model does not carry; composing
    /// one produces an inline diagnostic, never a hard failure
    Unsupported(String),
}

impl ValueSpecification {
    /// String literal from anything stringish
    pub fn string(value: impl Into<String>) -> Self {
        ValueSpecification::String(value.into())
    }

    /// Integer literal from a machine integer
    pub fn integer(value: i64) -> Self {
        ValueSpecification::Integer(BigInt::from(value))
    }

    /// Variable reference by name (no declared type)
    pub fn variable(name: impl Into<String>) -> Self {
        ValueSpecification::Variable(Variable::named(name))
    }

    /// True for scalar literals (not collections, calls, or other
    /// composite nodes)
    pub fn is_primitive_literal(&self) -> bool {
        matches!(
            self,
            ValueSpecification::String(_)
                | ValueSpecification::Integer(_)
                | ValueSpecification::Float(_)
                | ValueSpecification::Decimal(_)
                | ValueSpecification::Boolean(_)
                | ValueSpecification::DateTime(_)
                | ValueSpecification::StrictDate(_)
                | ValueSpecification::StrictTime(_)
                | ValueSpecification::LatestDate
        )
    }
}

/// Variable reference or declaration (name plus optional declared type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    /// Declared type, present on signature parameters
    pub class: Option<String>,
    /// Declared multiplicity, present on signature parameters
    pub multiplicity: Option<Multiplicity>,
}

impl Variable {
    /// Bare reference with no declared type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            multiplicity: None,
        }
    }

    /// Typed signature parameter
    pub fn typed(name: impl Into<String>, class: impl Into<String>, multiplicity: Multiplicity) -> Self {
        Self {
            name: name.into(),
            class: Some(class.into()),
            multiplicity: Some(multiplicity),
        }
    }
}

/// Lambda: ordered parameters plus an ordered body statement sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaFunction {
    pub parameters: Vec<Variable>,
    pub body: Vec<ValueSpecification>,
}

impl LambdaFunction {
    /// Single-statement lambda with no parameters
    pub fn of(body: ValueSpecification) -> Self {
        Self {
            parameters: Vec::new(),
            body: vec![body],
        }
    }
}

/// Function application. The function is identified by name; whether the
/// name maps to a special form, an infix operator, or generic call syntax
/// is a rendering decision, not a model property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFunction {
    pub function: String,
    pub parameters: Vec<ValueSpecification>,
}

impl AppliedFunction {
    pub fn new(function: impl Into<String>, parameters: Vec<ValueSpecification>) -> Self {
        Self {
            function: function.into(),
            parameters,
        }
    }
}

/// Property access on a receiver. Extra parameters make this the
/// qualified-property form (`receiver.prop(x, y)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedProperty {
    pub receiver: Box<ValueSpecification>,
    pub property: String,
    pub parameters: Vec<ValueSpecification>,
}

/// Navigation path: start type, ordered property segments, optional alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationPath {
    pub start_type: String,
    pub path: Vec<String>,
    pub alias: Option<String>,
}

/// Graph-fetch tree node. The root names a class; nested nodes name
/// properties with optional alias, parameters, sub-type, and sub-trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphFetchTree {
    Root {
        class: String,
        subtrees: Vec<GraphFetchTree>,
    },
    Property {
        property: String,
        alias: Option<String>,
        parameters: Vec<ValueSpecification>,
        subtype: Option<String>,
        subtrees: Vec<GraphFetchTree>,
    },
}
