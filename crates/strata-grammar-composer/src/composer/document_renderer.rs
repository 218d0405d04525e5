// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! The document assembler: groups rendered elements into labeled
//! sections and concatenates them into the final text.
//!
//! Assembly order: explicit sections (from the caller or a section
//! index), then free-section extensions over the remainder, then a fixed
//! default grouping for anything still pending.

use super::context::RenderContext;
use super::element_renderer::render_element;
use super::extension::ComposerExtensions;
use crate::options::ComposerOptions;
use anyhow::bail;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::HashSet;
use strata_model::{Element, Section};

/// Dialect whose header is omitted when it opens the document
pub const DEFAULT_PARSER: &str = "Pure";

/// Default grouping order for elements no section claims
const DEFAULT_PARSER_ORDER: &[&str] = &["Pure", "Mapping", "Connection", "Runtime", "Data"];

/// Compose a document with the built-in renderers only.
pub fn compose_document(elements: &[Element], options: &ComposerOptions) -> anyhow::Result<String> {
    compose_document_with_extensions(elements, None, options, &ComposerExtensions::default())
}

/// Compose a document. Explicit sections may be passed by the caller;
/// when absent they are taken from section-index elements in the
/// collection. Elements no section claims end up in default-grouped
/// trailing sections.
pub fn compose_document_with_extensions(
    elements: &[Element],
    sections: Option<&[Section]>,
    options: &ComposerOptions,
    extensions: &ComposerExtensions,
) -> anyhow::Result<String> {
    let ctx = RenderContext::new(options.style);
    let nl = ctx.newline();
    let blank = format!("{}{}", nl, nl);

    // Path -> element, first occurrence winning on duplicates. Section
    // indexes are assembler input, never document content.
    let mut pending: IndexMap<&str, &Element> = IndexMap::new();
    for element in elements {
        if matches!(element, Element::SectionIndex(_)) {
            continue;
        }
        pending.entry(element.path()).or_insert(element);
    }
    let total = pending.len();

    let collected: Vec<Section>;
    let explicit: &[Section] = match sections {
        Some(sections) => sections,
        None => {
            collected = elements
                .iter()
                .filter_map(|e| match e {
                    Element::SectionIndex(index) => Some(index.sections.iter().cloned()),
                    _ => None,
                })
                .flatten()
                .collect();
            &collected
        }
    };

    let mut rendered_sections: Vec<String> = Vec::new();

    // 1. Explicit sections
    for (position, section) in explicit.iter().enumerate() {
        trace!(
            "composing section '{}' with {} element(s)",
            section.parser,
            section.elements.len()
        );
        let mut text = String::new();
        if !(position == 0 && section.parser == DEFAULT_PARSER) {
            text.push_str(&format!("###{}{}", section.parser, nl));
        }
        let mut seen_imports = HashSet::new();
        for import in &section.imports {
            if seen_imports.insert(import.as_str()) {
                text.push_str(&format!("import {}::*;{}", import, nl));
            }
        }
        let mut bodies: Vec<String> = Vec::new();
        for path in &section.elements {
            match pending.shift_remove(path.as_str()) {
                Some(element) => {
                    let body = extensions
                        .compose_element(element, &ctx)
                        .unwrap_or_else(|| render_element(element, &ctx, extensions));
                    if !body.is_empty() {
                        bodies.push(body);
                    }
                }
                None => debug!(
                    "section '{}' references unknown or already-claimed element '{}'",
                    section.parser, path
                ),
            }
        }
        text.push_str(&bodies.join(&blank));
        let text = text.trim_end().to_string();
        if !text.is_empty() {
            rendered_sections.push(text);
        }
    }

    // 2. Free-section extensions over the remainder
    for composer in extensions.free_section_composers() {
        let remaining: Vec<&Element> = pending.values().copied().collect();
        if remaining.is_empty() {
            break;
        }
        if let Some(composed) = composer(&remaining, &ctx) {
            for path in &composed.element_paths {
                pending.shift_remove(path.as_str());
            }
            if !composed.text.is_empty() {
                rendered_sections.push(composed.text);
            }
        }
    }

    // 3. Default grouping for whatever is still pending
    for parser in DEFAULT_PARSER_ORDER {
        let claimed: Vec<&Element> = pending
            .values()
            .copied()
            .filter(|e| default_parser(e) == *parser)
            .collect();
        if claimed.is_empty() {
            continue;
        }
        let mut text = String::new();
        if !(rendered_sections.is_empty() && *parser == DEFAULT_PARSER) {
            text.push_str(&format!("###{}{}", parser, nl));
        }
        let bodies: Vec<String> = claimed
            .iter()
            .map(|element| {
                extensions
                    .compose_element(element, &ctx)
                    .unwrap_or_else(|| render_element(element, &ctx, extensions))
            })
            .filter(|body| !body.is_empty())
            .collect();
        for element in &claimed {
            pending.shift_remove(element.path());
        }
        text.push_str(&bodies.join(&blank));
        let text = text.trim_end().to_string();
        if !text.is_empty() {
            rendered_sections.push(text);
        }
    }

    debug!(
        "composed {} element(s) into {} section(s)",
        total,
        rendered_sections.len()
    );

    let unsupported = ctx.unsupported_constructs();
    if options.strict && !unsupported.is_empty() {
        bail!(
            "composition failed in strict mode: {} unsupported construct(s): {}",
            unsupported.len(),
            unsupported
                .iter()
                .map(|u| format!("{} '{}'", u.family, u.kind))
                .join(", ")
        );
    }

    Ok(rendered_sections.join(&blank))
}

/// The default dialect composing an element when no section claims it
fn default_parser(element: &Element) -> &'static str {
    match element {
        Element::Profile(_)
        | Element::Enumeration(_)
        | Element::Measure(_)
        | Element::Class(_)
        | Element::Association(_)
        | Element::Function(_)
        | Element::Extension(_) => "Pure",
        Element::Mapping(_) => "Mapping",
        Element::Connection(_) => "Connection",
        Element::Runtime(_) => "Runtime",
        Element::DataElement(_) => "Data",
        Element::SectionIndex(_) => "Pure",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::context::RenderStyle;
    use crate::composer::extension::ComposedSection;
    use strata_model::{
        Class, Connection, ElementInfo, ExtensionElement, JsonModelConnection, Mapping,
        Multiplicity, PackagedConnection, Property, SectionIndex,
    };

    fn class(path: &str) -> Element {
        Element::Class(Class {
            info: ElementInfo::at(path),
            superclasses: vec![],
            constraints: vec![],
            properties: vec![Property::new("name", "String", Multiplicity::ONE)],
            qualified_properties: vec![],
        })
    }

    fn mapping(path: &str) -> Element {
        Element::Mapping(Mapping {
            info: ElementInfo::at(path),
            includes: vec![],
            class_mappings: vec![],
            association_mappings: vec![],
            enumeration_mappings: vec![],
            tests: vec![],
        })
    }

    fn connection(path: &str) -> Element {
        Element::Connection(PackagedConnection {
            info: ElementInfo::at(path),
            connection: Connection::JsonModel(JsonModelConnection {
                class: "model::Person".to_string(),
                url: "data:application/json,{}".to_string(),
            }),
        })
    }

    #[test]
    fn default_grouping_orders_dialects() {
        let elements = vec![
            connection("model::Conn"),
            class("model::Person"),
            mapping("model::M"),
        ];
        let text = compose_document(&elements, &ComposerOptions::default()).unwrap();
        // Domain first (headerless), then mappings, then connections
        assert!(text.starts_with("Class model::Person"));
        let mapping_at = text.find("###Mapping").unwrap();
        let connection_at = text.find("###Connection").unwrap();
        assert!(mapping_at < connection_at);
        assert!(text.contains("\n\n###Mapping\nMapping model::M"));
    }

    #[test]
    fn leading_default_section_has_no_header() {
        let elements = vec![class("model::A")];
        let text = compose_document(&elements, &ComposerOptions::default()).unwrap();
        assert!(!text.contains("###Pure"));
    }

    #[test]
    fn non_leading_default_dialect_keeps_header() {
        let elements = vec![mapping("model::M"), class("model::A")];
        let sections = vec![Section {
            parser: "Mapping".to_string(),
            imports: vec![],
            elements: vec!["model::M".to_string()],
        }];
        let text = compose_document_with_extensions(
            &elements,
            Some(&sections),
            &ComposerOptions::default(),
            &ComposerExtensions::default(),
        )
        .unwrap();
        assert!(text.starts_with("###Mapping"));
        assert!(text.contains("###Pure\nClass model::A"));
    }

    #[test]
    fn explicit_sections_deduplicate_imports_and_elements() {
        let elements = vec![class("model::A"), class("model::B")];
        let sections = vec![Section {
            parser: "Pure".to_string(),
            imports: vec![
                "model::other".to_string(),
                "model::other".to_string(),
                "model::more".to_string(),
            ],
            elements: vec![
                "model::A".to_string(),
                "model::A".to_string(),
                "model::B".to_string(),
            ],
        }];
        let text = compose_document_with_extensions(
            &elements,
            Some(&sections),
            &ComposerOptions::default(),
            &ComposerExtensions::default(),
        )
        .unwrap();
        assert_eq!(text.matches("import model::other::*;").count(), 1);
        assert_eq!(text.matches("Class model::A").count(), 1);
        assert!(text.contains("import model::more::*;"));
    }

    #[test]
    fn duplicate_paths_first_occurrence_wins() {
        let mut duplicate = Class {
            info: ElementInfo::at("model::A"),
            superclasses: vec![],
            constraints: vec![],
            properties: vec![Property::new("other", "String", Multiplicity::ONE)],
            qualified_properties: vec![],
        };
        duplicate.superclasses.push("model::Base".to_string());
        let elements = vec![class("model::A"), Element::Class(duplicate)];
        let text = compose_document(&elements, &ComposerOptions::default()).unwrap();
        assert_eq!(text.matches("Class model::A").count(), 1);
        assert!(!text.contains("model::Base"));
    }

    #[test]
    fn section_index_drives_layout() {
        let elements = vec![
            class("model::A"),
            class("model::B"),
            Element::SectionIndex(SectionIndex {
                info: ElementInfo::at("__internal__::SectionIndex"),
                sections: vec![Section {
                    parser: "Pure".to_string(),
                    imports: vec!["model::common".to_string()],
                    elements: vec!["model::B".to_string(), "model::A".to_string()],
                }],
            }),
        ];
        let text = compose_document(&elements, &ComposerOptions::default()).unwrap();
        // Section order wins over collection order, imports precede
        assert!(text.starts_with("import model::common::*;\nClass model::B"));
        let b_at = text.find("Class model::B").unwrap();
        let a_at = text.find("Class model::A").unwrap();
        assert!(b_at < a_at);
    }

    #[test]
    fn free_section_composer_claims_elements() {
        let elements = vec![
            class("model::A"),
            Element::Extension(ExtensionElement {
                info: ElementInfo::at("model::store::Db"),
                kind: "Database".to_string(),
            }),
        ];
        let extensions = ComposerExtensions::new().with_free_section_composer(|pending, _ctx| {
            let claimed: Vec<String> = pending
                .iter()
                .filter(|e| matches!(e, Element::Extension(_)))
                .map(|e| e.path().to_string())
                .collect();
            if claimed.is_empty() {
                return None;
            }
            Some(ComposedSection {
                text: format!("###Relational\nDatabase {}\n(\n)", claimed[0]),
                element_paths: claimed,
            })
        });
        let text = compose_document_with_extensions(
            &elements,
            None,
            &ComposerOptions::default(),
            &extensions,
        )
        .unwrap();
        assert!(text.contains("###Relational\nDatabase model::store::Db"));
        assert!(!text.contains("Unsupported"));
        // The claimed element does not reappear in the default grouping
        assert_eq!(text.matches("model::store::Db").count(), 1);
    }

    #[test]
    fn unsupported_element_keeps_siblings_and_marks_itself() {
        let elements = vec![
            class("model::A"),
            Element::Extension(ExtensionElement {
                info: ElementInfo::at("model::X"),
                kind: "Widget".to_string(),
            }),
        ];
        let text = compose_document(&elements, &ComposerOptions::default()).unwrap();
        assert!(text.contains("Class model::A"));
        assert!(text.contains("/* Unsupported element: Widget */"));
    }

    #[test]
    fn strict_mode_fails_on_unsupported() {
        let elements = vec![Element::Extension(ExtensionElement {
            info: ElementInfo::at("model::X"),
            kind: "Widget".to_string(),
        })];
        let options = ComposerOptions {
            style: RenderStyle::Standard,
            strict: true,
        };
        let error = compose_document(&elements, &options).unwrap_err();
        assert!(error.to_string().contains("Widget"));
    }

    #[test]
    fn composition_is_deterministic() {
        let elements = vec![class("model::A"), mapping("model::M"), connection("model::C")];
        let options = ComposerOptions::default();
        let first = compose_document(&elements, &options).unwrap();
        let second = compose_document(&elements, &options).unwrap();
        assert_eq!(first, second);
    }
}
