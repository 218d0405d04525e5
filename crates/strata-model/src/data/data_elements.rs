// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Data declarations: reference test data packaged with a model.

use crate::data::expressions::ValueSpecification;
use crate::data::ElementInfo;
use serde::{Deserialize, Serialize};

/// Instances of one class held by a model-store data payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStoreInstances {
    pub class: String,
    pub instances: Vec<ValueSpecification>,
}

/// Embedded data payload of a data declaration. Formats provided by
/// plugins go through `Extension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmbeddedData {
    /// Serialized data in an external format
    ExternalFormat {
        content_type: String,
        data: String,
    },
    /// Instance expressions grouped by class
    ModelStore(Vec<ModelStoreInstances>),
    /// Reference to another data declaration by path
    Reference(String),
    Extension {
        kind: String,
    },
}

/// A data payload packaged as a top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataElement {
    pub info: ElementInfo,
    pub data: EmbeddedData,
}
