// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders runtime declarations: the mappings a runtime serves and its
//! connections grouped per store.

use super::connection_renderer::render_embedded_connection;
use super::context::{RenderContext, INDENT_UNIT};
use super::element_renderer::render_element_header;
use super::extension::ComposerExtensions;
use itertools::Itertools;
use strata_model::{Connection, IdentifiedConnection, PackagedRuntime, StoreConnections};

fn ind(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

pub fn render_packaged_runtime(
    packaged: &PackagedRuntime,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let runtime = &packaged.runtime;
    let mut out = render_element_header("Runtime", &packaged.info, ctx);
    out.push_str(&format!("{}{{", nl));

    let mappings = runtime
        .mappings
        .iter()
        .map(|m| format!("{}{}", ind(2), m))
        .join(&format!(",{}", nl));
    out.push_str(&format!(
        "{nl}{i}mappings:{nl}{i}[{nl}{mappings}{nl}{i}];",
        i = ind(1),
        mappings = mappings,
        nl = nl
    ));

    if !runtime.connections.is_empty() {
        let stores = runtime
            .connections
            .iter()
            .map(|store| render_store_connections(store, 2, ctx, extensions))
            .join(&format!(",{}", nl));
        out.push_str(&format!(
            "{nl}{i}connections:{nl}{i}[{nl}{stores}{nl}{i}];",
            i = ind(1),
            stores = stores,
            nl = nl
        ));
    }

    out.push_str(&format!("{}}}", nl));
    out
}

fn render_store_connections(
    store: &StoreConnections,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let connections = store
        .connections
        .iter()
        .map(|c| render_identified_connection(c, depth + 1, ctx, extensions))
        .join(&format!(",{}", nl));
    format!(
        "{i}{store}:{nl}{i}[{nl}{connections}{nl}{i}]",
        i = ind(depth),
        store = store.store,
        connections = connections,
        nl = nl
    )
}

fn render_identified_connection(
    identified: &IdentifiedConnection,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    match &identified.connection {
        // A pointer stays on the identifier's line
        Connection::Pointer(reference) => {
            format!("{}{}: {}", ind(depth), identified.id, reference)
        }
        connection => format!(
            "{i}{id}:{nl}{i}#{{{nl}{value}{nl}{i}}}#",
            i = ind(depth),
            id = identified.id,
            value = render_embedded_connection(connection, depth + 1, ctx, extensions),
            nl = nl
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::context::RenderStyle;
    use strata_model::{ElementInfo, EngineRuntime, JsonModelConnection};

    fn ctx() -> RenderContext {
        RenderContext::new(RenderStyle::Standard)
    }

    #[test]
    fn runtime_with_pointer_and_inline_connection() {
        let packaged = PackagedRuntime {
            info: ElementInfo::at("model::Runtime"),
            runtime: EngineRuntime {
                mappings: vec!["model::M".to_string()],
                connections: vec![StoreConnections {
                    store: "ModelStore".to_string(),
                    connections: vec![
                        IdentifiedConnection {
                            id: "connection_1".to_string(),
                            connection: Connection::Pointer(
                                "model::PersonConnection".to_string(),
                            ),
                        },
                        IdentifiedConnection {
                            id: "connection_2".to_string(),
                            connection: Connection::JsonModel(JsonModelConnection {
                                class: "model::Person".to_string(),
                                url: "data:application/json,{}".to_string(),
                            }),
                        },
                    ],
                }],
            },
        };
        assert_eq!(
            render_packaged_runtime(&packaged, &ctx(), &ComposerExtensions::default()),
            "Runtime model::Runtime\n\
             {\n\
             \x20 mappings:\n\
             \x20 [\n\
             \x20   model::M\n\
             \x20 ];\n\
             \x20 connections:\n\
             \x20 [\n\
             \x20   ModelStore:\n\
             \x20   [\n\
             \x20     connection_1: model::PersonConnection,\n\
             \x20     connection_2:\n\
             \x20     #{\n\
             \x20       JsonModelConnection\n\
             \x20       {\n\
             \x20         class: model::Person;\n\
             \x20         url: 'data:application/json,{}';\n\
             \x20       }\n\
             \x20     }#\n\
             \x20   ]\n\
             \x20 ];\n\
             }"
        );
    }

    #[test]
    fn runtime_without_connections_omits_the_block() {
        let packaged = PackagedRuntime {
            info: ElementInfo::at("model::Runtime"),
            runtime: EngineRuntime {
                mappings: vec!["model::M".to_string()],
                connections: vec![],
            },
        };
        assert_eq!(
            render_packaged_runtime(&packaged, &ctx(), &ComposerExtensions::default()),
            "Runtime model::Runtime\n{\n  mappings:\n  [\n    model::M\n  ];\n}"
        );
    }
}
