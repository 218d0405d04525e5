// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders data declarations and their embedded payloads.
//!
//! Payload kinds are offered to the embedded-data extension composers
//! first; the built-in external-format, model-store, and reference
//! payloads are the fallback.

use super::context::{RenderContext, INDENT_UNIT};
use super::element_renderer::render_element_header;
use super::expression_renderer::render_value_specification;
use super::extension::ComposerExtensions;
use crate::escape;
use itertools::Itertools;
use strata_model::{DataElement, EmbeddedData};

fn ind(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

pub fn render_data_element(
    element: &DataElement,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let mut out = render_element_header("Data", &element.info, ctx);
    out.push_str(&format!("{}{{", nl));
    out.push_str(&format!(
        "{}{}",
        nl,
        render_embedded_data(&element.data, 1, ctx, extensions)
    ));
    out.push_str(&format!("{}}}", nl));
    out
}

/// Render an embedded data payload at the given depth:
/// `FormatName` followed by a `#{ ... }#` block.
pub fn render_embedded_data(
    data: &EmbeddedData,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    if let Some(text) = extensions.compose_embedded_data(data, &ctx.indented_always(depth)) {
        return text;
    }
    let nl = ctx.newline();
    let (format_name, body) = match data {
        EmbeddedData::ExternalFormat { content_type, data } => (
            "ExternalFormat",
            format!(
                "{i}contentType: {content_type};{nl}{i}data: {data};",
                i = ind(depth + 1),
                content_type = escape::convert_string(content_type, true),
                data = escape::convert_string(data, true),
                nl = nl
            ),
        ),
        EmbeddedData::ModelStore(instances) => (
            "ModelStore",
            instances
                .iter()
                .map(|group| {
                    let values = group
                        .instances
                        .iter()
                        .map(|v| {
                            format!(
                                "{}{}",
                                ind(depth + 2),
                                render_value_specification(v, &ctx.indented(depth + 2))
                            )
                        })
                        .join(&format!(",{}", nl));
                    format!(
                        "{i}{class}:{nl}{i}[{nl}{values}{nl}{i}]",
                        i = ind(depth + 1),
                        class = group.class,
                        values = values,
                        nl = nl
                    )
                })
                .join(&format!(",{}", nl)),
        ),
        EmbeddedData::Reference(path) => {
            ("Reference", format!("{}{}", ind(depth + 1), path))
        }
        EmbeddedData::Extension { kind } => {
            return format!(
                "{}{}",
                ind(depth),
                ctx.record_unsupported("embedded data", kind)
            )
        }
    };
    format!(
        "{i}{format_name}{nl}{i}#{{{nl}{body}{nl}{i}}}#",
        i = ind(depth),
        format_name = format_name,
        body = body,
        nl = nl
    )
}
