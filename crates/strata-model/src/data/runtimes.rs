// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Runtime declarations: mappings plus per-store connection groups.

use crate::data::connections::Connection;
use crate::data::ElementInfo;
use serde::{Deserialize, Serialize};

/// A connection with the identifier it is registered under in a runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedConnection {
    pub id: String,
    pub connection: Connection,
}

/// All connections a runtime holds against one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConnections {
    /// Store path (`ModelStore` for model-to-model runtimes)
    pub store: String,
    pub connections: Vec<IdentifiedConnection>,
}

/// Runtime value: the mappings it serves and its connections per store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineRuntime {
    pub mappings: Vec<String>,
    pub connections: Vec<StoreConnections>,
}

/// A runtime packaged as a top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagedRuntime {
    pub info: ElementInfo,
    pub runtime: EngineRuntime,
}
