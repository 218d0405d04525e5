// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders top-level declarations to concrete syntax.
//!
//! One rule per declaration kind: annotation prefix, qualified path, then
//! a kind-specific bracketed body. Embedded expressions delegate to the
//! expression renderer, types and multiplicities to the literal renderer.

use super::connection_renderer;
use super::context::RenderContext;
use super::data_renderer;
use super::expression_renderer::{render_statements, render_value_specification};
use super::extension::ComposerExtensions;
use super::literal_renderer::render_multiplicity;
use super::mapping_renderer;
use super::runtime_renderer;
use crate::escape;
use itertools::Itertools;
use strata_model::{
    Association, Class, ConcreteFunction, Element, ElementInfo, Enumeration, Measure, Profile,
    Property, QualifiedProperty, StereotypePointer, TaggedValue, Unit, Variable,
};

/// Render a declaration. The extension registry is consulted for the
/// constructs it owns (extension elements, class mappings, connection
/// values, embedded data, test assertions); built-in rules handle the
/// rest.
pub fn render_element(element: &Element, ctx: &RenderContext, extensions: &ComposerExtensions) -> String {
    match element {
        Element::Profile(e) => render_profile(e, ctx),
        Element::Enumeration(e) => render_enumeration(e, ctx),
        Element::Measure(e) => render_measure(e, ctx),
        Element::Class(e) => render_class(e, ctx),
        Element::Association(e) => render_association(e, ctx),
        Element::Function(e) => render_function(e, ctx),
        Element::Mapping(e) => mapping_renderer::render_mapping(e, ctx, extensions),
        Element::Connection(e) => {
            connection_renderer::render_packaged_connection(e, ctx, extensions)
        }
        Element::Runtime(e) => runtime_renderer::render_packaged_runtime(e, ctx, extensions),
        Element::DataElement(e) => data_renderer::render_data_element(e, ctx, extensions),
        // Section indexes drive the assembler; they have no text of their own
        Element::SectionIndex(_) => String::new(),
        Element::Extension(e) => extensions
            .compose_element(element, ctx)
            .unwrap_or_else(|| ctx.record_unsupported("element", &e.kind)),
    }
}

// ----------------------------------------------------------------------
// Shared pieces
// ----------------------------------------------------------------------

/// Stereotype prefix then tagged-value prefix, each followed by a space;
/// empty when the declaration carries no annotations.
pub(super) fn render_annotations(
    stereotypes: &[StereotypePointer],
    tagged_values: &[TaggedValue],
    _ctx: &RenderContext,
) -> String {
    let mut out = String::new();
    if !stereotypes.is_empty() {
        out.push_str(&format!(
            "<<{}>> ",
            stereotypes
                .iter()
                .map(|s| format!("{}.{}", s.profile, s.value))
                .join(", ")
        ));
    }
    if !tagged_values.is_empty() {
        out.push_str(&format!(
            "{{{}}} ",
            tagged_values
                .iter()
                .map(|t| format!(
                    "{}.{} = {}",
                    t.tag.profile,
                    t.tag.value,
                    escape::convert_string(&t.value, true)
                ))
                .join(", ")
        ));
    }
    out
}

/// `Keyword <<...>> {...} pkg::Name` - the first line of most declarations
pub(super) fn render_element_header(
    keyword: &str,
    info: &ElementInfo,
    ctx: &RenderContext,
) -> String {
    format!(
        "{} {}{}",
        ctx.keyword(keyword),
        render_annotations(&info.stereotypes, &info.tagged_values, ctx),
        ctx.element_name(&info.path)
    )
}

fn render_property(property: &Property, ctx: &RenderContext) -> String {
    let mut out = format!(
        "{}{}: {}[{}]",
        render_annotations(&property.stereotypes, &property.tagged_values, ctx),
        property.name,
        property.class,
        render_multiplicity(&property.multiplicity)
    );
    if let Some(default) = &property.default_value {
        out.push_str(&format!(" = {}", render_value_specification(default, ctx)));
    }
    out
}

fn render_signature_parameters(parameters: &[Variable], ctx: &RenderContext) -> String {
    let signature_ctx = ctx.with_variable_in_signature(true);
    parameters
        .iter()
        .map(|p| super::expression_renderer::render_variable(p, &signature_ctx))
        .join(", ")
}

fn render_qualified_property(property: &QualifiedProperty, ctx: &RenderContext) -> String {
    format!(
        "{}{}({}) {{{}}}: {}[{}]",
        render_annotations(&property.stereotypes, &property.tagged_values, ctx),
        property.name,
        render_signature_parameters(&property.parameters, ctx),
        render_statements(&property.body, ctx),
        property.return_type,
        render_multiplicity(&property.return_multiplicity)
    )
}

// ----------------------------------------------------------------------
// Declaration kinds
// ----------------------------------------------------------------------

fn render_profile(profile: &Profile, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let mut out = render_element_header("Profile", &profile.info, ctx);
    out.push_str(&format!("{}{{", nl));
    if !profile.stereotypes.is_empty() {
        out.push_str(&format!(
            "{}  stereotypes: [{}];",
            nl,
            profile.stereotypes.join(", ")
        ));
    }
    if !profile.tags.is_empty() {
        out.push_str(&format!("{}  tags: [{}];", nl, profile.tags.join(", ")));
    }
    out.push_str(&format!("{}}}", nl));
    out
}

fn render_enumeration(enumeration: &Enumeration, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let mut out = render_element_header("Enum", &enumeration.info, ctx);
    out.push_str(&format!("{}{{", nl));
    let values = enumeration
        .values
        .iter()
        .map(|v| {
            format!(
                "{}  {}{}",
                nl,
                render_annotations(&v.stereotypes, &v.tagged_values, ctx),
                v.name
            )
        })
        .join(",");
    out.push_str(&values);
    out.push_str(&format!("{}}}", nl));
    out
}

fn render_unit(unit: &Unit, canonical: bool, ctx: &RenderContext) -> String {
    let marker = if canonical { "*" } else { "" };
    match &unit.conversion {
        Some(conversion) => format!(
            "{}{}: {} -> {};",
            marker,
            unit.name,
            conversion.parameter,
            render_statements(&conversion.body, &ctx.indented(1))
        ),
        None => format!("{}{};", marker, unit.name),
    }
}

fn render_measure(measure: &Measure, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let mut out = render_element_header("Measure", &measure.info, ctx);
    out.push_str(&format!("{}{{", nl));
    if let Some(canonical) = &measure.canonical_unit {
        out.push_str(&format!("{}  {}", nl, render_unit(canonical, true, ctx)));
    }
    for unit in &measure.non_canonical_units {
        out.push_str(&format!("{}  {}", nl, render_unit(unit, false, ctx)));
    }
    out.push_str(&format!("{}}}", nl));
    out
}

fn render_class(class: &Class, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let body_ctx = ctx.indented(1);
    let mut out = render_element_header("Class", &class.info, ctx);
    if !class.superclasses.is_empty() {
        out.push_str(&format!(" extends {}", class.superclasses.join(", ")));
    }
    if !class.constraints.is_empty() {
        out.push_str(&format!("{}[", nl));
        let constraints = class
            .constraints
            .iter()
            .map(|c| {
                // The constraint owns a full lambda; the grammar prints
                // only its body here
                format!(
                    "{}  {}: {}",
                    nl,
                    c.name,
                    super::expression_renderer::render_lambda_body(&c.function, &body_ctx)
                )
            })
            .join(",");
        out.push_str(&constraints);
        out.push_str(&format!("{}]", nl));
    }
    out.push_str(&format!("{}{{", nl));
    for property in &class.properties {
        out.push_str(&format!("{}  {};", nl, render_property(property, &body_ctx)));
    }
    for property in &class.qualified_properties {
        out.push_str(&format!(
            "{}  {};",
            nl,
            render_qualified_property(property, &body_ctx)
        ));
    }
    out.push_str(&format!("{}}}", nl));
    out
}

fn render_association(association: &Association, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let body_ctx = ctx.indented(1);
    let mut out = render_element_header("Association", &association.info, ctx);
    out.push_str(&format!("{}{{", nl));
    for property in &association.properties {
        out.push_str(&format!("{}  {};", nl, render_property(property, &body_ctx)));
    }
    for property in &association.qualified_properties {
        out.push_str(&format!(
            "{}  {};",
            nl,
            render_qualified_property(property, &body_ctx)
        ));
    }
    out.push_str(&format!("{}}}", nl));
    out
}

fn render_function(function: &ConcreteFunction, ctx: &RenderContext) -> String {
    let nl = ctx.newline();
    let body_ctx = ctx.indented(1);
    let mut out = format!(
        "{} {}{}({}): {}[{}]",
        ctx.keyword("function"),
        render_annotations(&function.info.stereotypes, &function.info.tagged_values, ctx),
        ctx.element_name(&function.info.path),
        render_signature_parameters(&function.parameters, ctx),
        function.return_type,
        render_multiplicity(&function.return_multiplicity)
    );
    out.push_str(&format!("{}{{", nl));
    let body = function
        .body
        .iter()
        .map(|s| format!("{}  {}", nl, render_value_specification(s, &body_ctx)))
        .join(";");
    out.push_str(&body);
    out.push_str(&format!("{}}}", nl));
    out
}
