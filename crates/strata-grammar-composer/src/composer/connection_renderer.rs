// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders connection values, packaged or embedded in a runtime.
//!
//! Store-specific connection kinds are offered to the extension registry
//! first; the built-in model connections are the fallback.

use super::context::{RenderContext, INDENT_UNIT};
use super::element_renderer::render_annotations;
use super::extension::ComposerExtensions;
use crate::escape;
use itertools::Itertools;
use strata_model::{Connection, PackagedConnection};

fn ind(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Grammar keyword introducing a connection value
fn connection_keyword(connection: &Connection) -> Option<&str> {
    match connection {
        Connection::JsonModel(_) => Some("JsonModelConnection"),
        Connection::XmlModel(_) => Some("XmlModelConnection"),
        Connection::ModelChain(_) => Some("ModelChainConnection"),
        Connection::Pointer(_) | Connection::Extension { .. } => None,
    }
}

/// The lines between a connection's braces, at the given depth
fn connection_body(connection: &Connection, depth: usize, ctx: &RenderContext) -> Option<String> {
    let nl = ctx.newline();
    match connection {
        Connection::JsonModel(c) => Some(format!(
            "{i}class: {class};{nl}{i}url: {url};",
            i = ind(depth),
            class = c.class,
            url = escape::convert_string(&c.url, true),
            nl = nl
        )),
        Connection::XmlModel(c) => Some(format!(
            "{i}class: {class};{nl}{i}url: {url};",
            i = ind(depth),
            class = c.class,
            url = escape::convert_string(&c.url, true),
            nl = nl
        )),
        Connection::ModelChain(c) => Some(format!(
            "{i}mappings: [{mappings}];",
            i = ind(depth),
            mappings = c.mappings.iter().join(", ")
        )),
        Connection::Pointer(_) | Connection::Extension { .. } => None,
    }
}

/// Render a packaged connection declaration.
pub fn render_packaged_connection(
    packaged: &PackagedConnection,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    if let Some(text) =
        extensions.compose_connection(&packaged.connection, Some(&packaged.info.path), ctx)
    {
        return text;
    }
    let nl = ctx.newline();
    let name = format!(
        "{}{}",
        render_annotations(&packaged.info.stereotypes, &packaged.info.tagged_values, ctx),
        ctx.element_name(&packaged.info.path)
    );
    match (
        connection_keyword(&packaged.connection),
        connection_body(&packaged.connection, 1, ctx),
    ) {
        (Some(keyword), Some(body)) => format!(
            "{keyword} {name}{nl}{{{nl}{body}{nl}}}",
            keyword = ctx.keyword(keyword),
            name = name,
            body = body,
            nl = nl
        ),
        _ => ctx.record_unsupported("connection", connection_kind_label(&packaged.connection)),
    }
}

/// Render a connection value embedded at `depth` (inside a runtime's
/// `#{ ... }#` block). Pointers render as the bare referenced path.
pub fn render_embedded_connection(
    connection: &Connection,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    if let Connection::Pointer(reference) = connection {
        return reference.clone();
    }
    if let Some(text) =
        extensions.compose_connection(connection, None, &ctx.indented_always(depth))
    {
        return text;
    }
    let nl = ctx.newline();
    match (
        connection_keyword(connection),
        connection_body(connection, depth + 1, ctx),
    ) {
        (Some(keyword), Some(body)) => format!(
            "{i}{keyword}{nl}{i}{{{nl}{body}{nl}{i}}}",
            i = ind(depth),
            keyword = keyword,
            body = body,
            nl = nl
        ),
        _ => ctx.record_unsupported("connection", connection_kind_label(connection)),
    }
}

fn connection_kind_label(connection: &Connection) -> &str {
    match connection {
        Connection::Pointer(_) => "ConnectionPointer",
        Connection::JsonModel(_) => "JsonModelConnection",
        Connection::XmlModel(_) => "XmlModelConnection",
        Connection::ModelChain(_) => "ModelChainConnection",
        Connection::Extension { kind, .. } => kind,
    }
}
