// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Connection values and their packaged declaration form.

use crate::data::ElementInfo;
use serde::{Deserialize, Serialize};

/// A connection value: either a by-reference pointer or an inline
/// definition. Store-specific kinds provided by plugins go through
/// `Extension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Connection {
    /// Reference to a packaged connection by path
    Pointer(String),
    JsonModel(JsonModelConnection),
    XmlModel(XmlModelConnection),
    ModelChain(ModelChainConnection),
    Extension {
        kind: String,
        store: Option<String>,
    },
}

/// Model connection over JSON instance data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonModelConnection {
    pub class: String,
    pub url: String,
}

/// Model connection over XML instance data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlModelConnection {
    pub class: String,
    pub url: String,
}

/// Connection that chains through a sequence of mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelChainConnection {
    pub mappings: Vec<String>,
}

/// A connection packaged as a top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagedConnection {
    pub info: ElementInfo,
    pub connection: Connection,
}
