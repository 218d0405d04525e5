// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders mapping declarations: class mappings, association mappings,
//! enumeration mappings, and the legacy embedded test suites.
//!
//! Class-mapping, association-mapping, and test-assertion kinds are
//! offered to the extension registry first; the built-in rules below are
//! the fallback.

use super::context::{RenderContext, INDENT_UNIT};
use super::element_renderer::render_element_header;
use super::expression_renderer::{render_lambda, render_lambda_body};
use super::extension::ComposerExtensions;
use crate::escape;
use itertools::Itertools;
use strata_model::{
    AggregateView, AssociationMapping, ClassMapping, EnumValueMappingSource, EnumerationMapping,
    Mapping, MappingInclude, MappingTest, OperationClassMapping, PropertyMapping,
    PureInstanceClassMapping, PurePropertyMapping, TestAssertion, XStorePropertyMapping,
};

fn ind(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

pub fn render_mapping(mapping: &Mapping, ctx: &RenderContext, extensions: &ComposerExtensions) -> String {
    let nl = ctx.newline();
    let mut blocks: Vec<String> = Vec::new();

    if !mapping.includes.is_empty() {
        blocks.push(
            mapping
                .includes
                .iter()
                .map(|include| render_include(include, 1))
                .join(nl),
        );
    }
    for class_mapping in &mapping.class_mappings {
        blocks.push(render_class_mapping(class_mapping, 1, ctx, extensions));
    }
    for association_mapping in &mapping.association_mappings {
        blocks.push(render_association_mapping(association_mapping, 1, ctx, extensions));
    }
    for enumeration_mapping in &mapping.enumeration_mappings {
        blocks.push(render_enumeration_mapping(enumeration_mapping, 1, ctx));
    }
    if !mapping.tests.is_empty() {
        blocks.push(render_tests(&mapping.tests, 1, ctx, extensions));
    }

    let mut out = render_element_header("Mapping", &mapping.info, ctx);
    out.push_str(&format!("{}(", nl));
    if !blocks.is_empty() {
        out.push_str(nl);
        out.push_str(&blocks.join(&format!("{}{}", nl, nl)));
    }
    out.push_str(&format!("{})", nl));
    out
}

fn render_include(include: &MappingInclude, depth: usize) -> String {
    let mut out = format!("{}include {}", ind(depth), include.included);
    if let (Some(source), Some(target)) = (&include.source_store, &include.target_store) {
        out.push_str(&format!("[{} -> {}]", source, target));
    }
    out
}

// ----------------------------------------------------------------------
// Class mappings
// ----------------------------------------------------------------------

/// `*pkg::Target[id]: Keyword` - the class mapping's first line
fn class_mapping_header(class: &str, id: Option<&str>, root: bool, keyword: &str) -> String {
    let marker = if root { "*" } else { "" };
    match id {
        Some(id) => format!("{}{}[{}]: {}", marker, class, id, keyword),
        None => format!("{}{}: {}", marker, class, keyword),
    }
}

fn class_mapping_keyword(class_mapping: &ClassMapping) -> &str {
    match class_mapping {
        ClassMapping::Operation(_) => "Operation",
        ClassMapping::PureInstance(_) => "Pure",
        ClassMapping::AggregationAware(_) => "AggregationAware",
        ClassMapping::Extension { kind, .. } => kind,
    }
}

fn render_class_mapping(
    class_mapping: &ClassMapping,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    if let Some(text) = extensions.compose_class_mapping(class_mapping, &ctx.indented_always(depth)) {
        return text;
    }
    let nl = ctx.newline();
    let (class, id, root) = match class_mapping {
        ClassMapping::Operation(m) => (m.class.as_str(), m.id.as_deref(), m.root),
        ClassMapping::PureInstance(m) => (m.class.as_str(), m.id.as_deref(), m.root),
        ClassMapping::AggregationAware(m) => (m.class.as_str(), m.id.as_deref(), m.root),
        ClassMapping::Extension { class, id, root, .. } => (class.as_str(), id.as_deref(), *root),
    };
    format!(
        "{i}{header}{nl}{i}{{{nl}{body}{nl}{i}}}",
        i = ind(depth),
        header = class_mapping_header(class, id, root, class_mapping_keyword(class_mapping)),
        body = render_class_mapping_body(class_mapping, depth + 1, ctx, extensions),
        nl = nl
    )
}

/// The lines between a class mapping's braces, at the given depth
fn render_class_mapping_body(
    class_mapping: &ClassMapping,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    match class_mapping {
        ClassMapping::Operation(m) => render_operation_body(m, depth, nl),
        ClassMapping::PureInstance(m) => render_pure_instance_body(m, depth, ctx),
        ClassMapping::AggregationAware(m) => {
            let views = m
                .views
                .iter()
                .map(|view| render_aggregate_view(view, depth + 1, ctx, extensions))
                .join(",");
            format!(
                "{i}Views:{nl}{i}[{views}{nl}{i}],{nl}{i}~mainMapping: {main}",
                i = ind(depth),
                views = views,
                main = render_nested_class_mapping(&m.main_mapping, depth, ctx, extensions),
                nl = nl
            )
        }
        ClassMapping::Extension { kind, .. } => format!(
            "{}{}",
            ind(depth),
            ctx.record_unsupported("class mapping", kind)
        ),
    }
}

fn render_operation_body(mapping: &OperationClassMapping, depth: usize, _nl: &str) -> String {
    format!(
        "{}{}({})",
        ind(depth),
        mapping.operation,
        mapping.parameters.join(",")
    )
}

fn render_pure_instance_body(
    mapping: &PureInstanceClassMapping,
    depth: usize,
    ctx: &RenderContext,
) -> String {
    let nl = ctx.newline();
    let transform_ctx = ctx.indented(depth);
    let mut lines: Vec<String> = Vec::new();
    if let Some(source) = &mapping.source {
        lines.push(format!("{}~src {}", ind(depth), source));
    }
    if let Some(filter) = &mapping.filter {
        lines.push(format!(
            "{}~filter {}",
            ind(depth),
            render_lambda_body(filter, &transform_ctx)
        ));
    }
    let properties = mapping
        .property_mappings
        .iter()
        .map(|pm| format!("{}{}", ind(depth), render_property_mapping(pm, &transform_ctx)))
        .join(&format!(",{}", nl));
    if !properties.is_empty() {
        lines.push(properties);
    }
    lines.join(nl)
}

fn render_property_mapping(property_mapping: &PropertyMapping, ctx: &RenderContext) -> String {
    match property_mapping {
        PropertyMapping::Pure(pm) => render_pure_property_mapping(pm, ctx),
        PropertyMapping::Extension { kind, .. } => {
            ctx.record_unsupported("property mapping", kind)
        }
    }
}

fn render_pure_property_mapping(pm: &PurePropertyMapping, ctx: &RenderContext) -> String {
    let mut out = pm.property.clone();
    if let Some(target) = &pm.target {
        out.push_str(&format!("[{}]", target));
    }
    out.push_str(": ");
    if let Some(enumeration_mapping) = &pm.enumeration_mapping {
        out.push_str(&format!("EnumerationMapping {}: ", enumeration_mapping));
    }
    out.push_str(&render_lambda_body(&pm.transform, ctx));
    out
}

fn render_aggregate_view(
    view: &AggregateView,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let body_ctx = ctx.indented(depth + 1);
    let group_by = view
        .group_by_functions
        .iter()
        .map(|f| render_lambda_body(f, &body_ctx))
        .join(", ");
    let aggregates = view
        .aggregate_values
        .iter()
        .map(|f| render_lambda_body(f, &body_ctx))
        .join(", ");
    format!(
        "{nl}{i}({nl}{i}  ~canAggregate {can},{nl}{i}  ~groupByFunctions: [{group_by}],{nl}{i}  ~aggregateValues: [{aggregates}],{nl}{i}  ~aggregateMapping: {mapping}{nl}{i})",
        i = ind(depth),
        can = view.can_aggregate,
        group_by = group_by,
        aggregates = aggregates,
        mapping = render_nested_class_mapping(&view.mapping, depth + 1, ctx, extensions),
        nl = nl
    )
}

/// Render a class mapping in a value position (after `~mainMapping:` or
/// `~aggregateMapping:`): keyword on the current line, braced body below
/// at `depth`.
fn render_nested_class_mapping(
    class_mapping: &ClassMapping,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    format!(
        "{keyword}{nl}{i}{{{nl}{body}{nl}{i}}}",
        keyword = class_mapping_keyword(class_mapping),
        i = ind(depth),
        body = render_class_mapping_body(class_mapping, depth + 1, ctx, extensions),
        nl = nl
    )
}

// ----------------------------------------------------------------------
// Association and enumeration mappings
// ----------------------------------------------------------------------

fn render_association_mapping(
    mapping: &AssociationMapping,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    if let Some(text) =
        extensions.compose_association_mapping(mapping, &ctx.indented_always(depth))
    {
        return text;
    }
    let nl = ctx.newline();
    let id = mapping
        .id
        .as_deref()
        .map(|id| format!("[{}]", id))
        .unwrap_or_default();
    let properties = mapping
        .property_mappings
        .iter()
        .map(|pm| format!("{}{}", ind(depth + 1), render_xstore_property_mapping(pm, depth, ctx)))
        .join(&format!(",{}", nl));
    format!(
        "{i}{assoc}{id}: XStore{nl}{i}{{{nl}{props}{nl}{i}}}",
        i = ind(depth),
        assoc = mapping.association,
        id = id,
        props = properties,
        nl = nl
    )
}

fn render_xstore_property_mapping(
    pm: &XStorePropertyMapping,
    depth: usize,
    ctx: &RenderContext,
) -> String {
    let ids = match (&pm.source_id, &pm.target_id) {
        (Some(source), Some(target)) => format!("[{}, {}]", source, target),
        (Some(source), None) => format!("[{}]", source),
        (None, Some(target)) => format!("[{}]", target),
        (None, None) => String::new(),
    };
    format!(
        "{}{}: {}",
        pm.property,
        ids,
        render_lambda_body(&pm.cross_expression, &ctx.indented(depth + 1))
    )
}

fn render_enumeration_mapping(
    mapping: &EnumerationMapping,
    depth: usize,
    ctx: &RenderContext,
) -> String {
    let nl = ctx.newline();
    let keyword = match &mapping.id {
        Some(id) => format!("EnumerationMapping {}", id),
        None => "EnumerationMapping".to_string(),
    };
    let values = mapping
        .value_mappings
        .iter()
        .map(|vm| {
            format!(
                "{}{}: [{}]",
                ind(depth + 1),
                vm.value,
                vm.sources.iter().map(render_enum_source).join(", ")
            )
        })
        .join(&format!(",{}", nl));
    format!(
        "{i}{enumeration}: {keyword}{nl}{i}{{{nl}{values}{nl}{i}}}",
        i = ind(depth),
        enumeration = mapping.enumeration,
        keyword = keyword,
        values = values,
        nl = nl
    )
}

fn render_enum_source(source: &EnumValueMappingSource) -> String {
    match source {
        EnumValueMappingSource::String(s) => escape::convert_string(s, true),
        EnumValueMappingSource::Integer(i) => i.to_string(),
        EnumValueMappingSource::Enum { enumeration, value } => {
            format!("{}.{}", enumeration, value)
        }
    }
}

// ----------------------------------------------------------------------
// Legacy mapping tests
// ----------------------------------------------------------------------

fn render_tests(
    tests: &[MappingTest],
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let rendered = tests
        .iter()
        .map(|t| render_test(t, depth + 1, ctx, extensions))
        .join(",");
    format!(
        "{i}MappingTests{nl}{i}[{tests}{nl}{i}]",
        i = ind(depth),
        tests = rendered,
        nl = nl
    )
}

fn render_test(
    test: &MappingTest,
    depth: usize,
    ctx: &RenderContext,
    extensions: &ComposerExtensions,
) -> String {
    let nl = ctx.newline();
    let data = test
        .input_data
        .iter()
        .map(|input| {
            format!(
                "{}  <Object, {}, {}, {}>",
                ind(depth + 1),
                input.format,
                input.source_class,
                escape::convert_string(&input.data, true)
            )
        })
        .join(&format!(",{}", nl));
    let assertion = extensions
        .compose_test_assertion(&test.assertion, ctx)
        .unwrap_or_else(|| match &test.assertion {
            TestAssertion::ExpectedOutput(expected) => escape::convert_string(expected, true),
            TestAssertion::Extension { kind, .. } => {
                ctx.record_unsupported("test assertion", kind)
            }
        });
    format!(
        "{nl}{i}{name}{nl}{i}({nl}{b}query: {query};{nl}{b}data:{nl}{b}[{nl}{data}{nl}{b}];{nl}{b}assert: {assertion};{nl}{i})",
        i = ind(depth),
        b = ind(depth + 1),
        name = test.name,
        query = render_lambda(&test.query, &ctx.indented(depth + 1)),
        data = data,
        assertion = assertion,
        nl = nl
    )
}
