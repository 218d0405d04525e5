// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! The extension registry: ordered composer callbacks, one family per
//! extensible construct kind.
//!
//! Dispatch is first-match-wins in registration order. "No match" is an
//! explicit `None` (an empty string also counts as no match, so a
//! callback can cheaply decline); when every callback declines, callers
//! fall back to the built-in rendering for that kind.

use super::context::RenderContext;
use strata_model::{
    AssociationMapping, ClassMapping, Connection, Element, EmbeddedData, TestAssertion,
};

/// A document section contributed by a free-section composer: its full
/// text plus the paths of the elements it claims.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedSection {
    pub text: String,
    pub element_paths: Vec<String>,
}

type ElementComposer = Box<dyn Fn(&Element, &RenderContext) -> Option<String>>;
type ClassMappingComposer = Box<dyn Fn(&ClassMapping, &RenderContext) -> Option<String>>;
type AssociationMappingComposer =
    Box<dyn Fn(&AssociationMapping, &RenderContext) -> Option<String>>;
type ConnectionComposer =
    Box<dyn Fn(&Connection, Option<&str>, &RenderContext) -> Option<String>>;
type EmbeddedDataComposer = Box<dyn Fn(&EmbeddedData, &RenderContext) -> Option<String>>;
type TestAssertionComposer = Box<dyn Fn(&TestAssertion, &RenderContext) -> Option<String>>;
type FreeSectionComposer = Box<dyn Fn(&[&Element], &RenderContext) -> Option<ComposedSection>>;

/// Ordered per-kind composer callbacks.
#[derive(Default)]
pub struct ComposerExtensions {
    element_composers: Vec<ElementComposer>,
    class_mapping_composers: Vec<ClassMappingComposer>,
    association_mapping_composers: Vec<AssociationMappingComposer>,
    connection_composers: Vec<ConnectionComposer>,
    embedded_data_composers: Vec<EmbeddedDataComposer>,
    test_assertion_composers: Vec<TestAssertionComposer>,
    free_section_composers: Vec<FreeSectionComposer>,
}

/// Apply callbacks in registration order; the first non-empty result wins.
fn first_match<T: ?Sized>(
    composers: &[Box<T>],
    mut apply: impl FnMut(&T) -> Option<String>,
) -> Option<String> {
    composers
        .iter()
        .filter_map(|c| apply(c))
        .find(|text| !text.is_empty())
}

impl ComposerExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Registration (builder style)
    // ------------------------------------------------------------------

    pub fn with_element_composer(
        mut self,
        composer: impl Fn(&Element, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.element_composers.push(Box::new(composer));
        self
    }

    pub fn with_class_mapping_composer(
        mut self,
        composer: impl Fn(&ClassMapping, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.class_mapping_composers.push(Box::new(composer));
        self
    }

    pub fn with_association_mapping_composer(
        mut self,
        composer: impl Fn(&AssociationMapping, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.association_mapping_composers.push(Box::new(composer));
        self
    }

    /// The path is present when composing a packaged connection and
    /// absent for a connection embedded in a runtime.
    pub fn with_connection_composer(
        mut self,
        composer: impl Fn(&Connection, Option<&str>, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.connection_composers.push(Box::new(composer));
        self
    }

    pub fn with_embedded_data_composer(
        mut self,
        composer: impl Fn(&EmbeddedData, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.embedded_data_composers.push(Box::new(composer));
        self
    }

    pub fn with_test_assertion_composer(
        mut self,
        composer: impl Fn(&TestAssertion, &RenderContext) -> Option<String> + 'static,
    ) -> Self {
        self.test_assertion_composers.push(Box::new(composer));
        self
    }

    /// Free-section composers run after explicit sections, each against
    /// the still-pending elements, and claim whatever they compose.
    pub fn with_free_section_composer(
        mut self,
        composer: impl Fn(&[&Element], &RenderContext) -> Option<ComposedSection> + 'static,
    ) -> Self {
        self.free_section_composers.push(Box::new(composer));
        self
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    pub fn compose_element(&self, element: &Element, ctx: &RenderContext) -> Option<String> {
        first_match(&self.element_composers, |c| c(element, ctx))
    }

    pub fn compose_class_mapping(
        &self,
        class_mapping: &ClassMapping,
        ctx: &RenderContext,
    ) -> Option<String> {
        first_match(&self.class_mapping_composers, |c| c(class_mapping, ctx))
    }

    pub fn compose_association_mapping(
        &self,
        association_mapping: &AssociationMapping,
        ctx: &RenderContext,
    ) -> Option<String> {
        first_match(&self.association_mapping_composers, |c| {
            c(association_mapping, ctx)
        })
    }

    pub fn compose_connection(
        &self,
        connection: &Connection,
        path: Option<&str>,
        ctx: &RenderContext,
    ) -> Option<String> {
        first_match(&self.connection_composers, |c| c(connection, path, ctx))
    }

    pub fn compose_embedded_data(
        &self,
        data: &EmbeddedData,
        ctx: &RenderContext,
    ) -> Option<String> {
        first_match(&self.embedded_data_composers, |c| c(data, ctx))
    }

    pub fn compose_test_assertion(
        &self,
        assertion: &TestAssertion,
        ctx: &RenderContext,
    ) -> Option<String> {
        first_match(&self.test_assertion_composers, |c| c(assertion, ctx))
    }

    /// The registered free-section composers, in registration order.
    /// Unlike the other families these do not stop at the first match:
    /// every composer gets a chance to claim elements.
    pub fn free_section_composers(
        &self,
    ) -> impl Iterator<Item = &dyn Fn(&[&Element], &RenderContext) -> Option<ComposedSection>> {
        self.free_section_composers.iter().map(|c| c.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::context::{RenderContext, RenderStyle};
    use strata_model::{ElementInfo, ExtensionElement};

    fn extension_element(kind: &str) -> Element {
        Element::Extension(ExtensionElement {
            info: ElementInfo::at("model::X"),
            kind: kind.to_string(),
        })
    }

    #[test]
    fn first_registered_composer_wins() {
        let extensions = ComposerExtensions::new()
            .with_element_composer(|_, _| Some("first".to_string()))
            .with_element_composer(|_, _| Some("second".to_string()));
        let ctx = RenderContext::new(RenderStyle::Standard);
        assert_eq!(
            extensions.compose_element(&extension_element("A"), &ctx),
            Some("first".to_string())
        );
    }

    #[test]
    fn empty_results_are_skipped() {
        let extensions = ComposerExtensions::new()
            .with_element_composer(|_, _| Some(String::new()))
            .with_element_composer(|_, _| None)
            .with_element_composer(|_, _| Some("third".to_string()));
        let ctx = RenderContext::new(RenderStyle::Standard);
        assert_eq!(
            extensions.compose_element(&extension_element("A"), &ctx),
            Some("third".to_string())
        );
    }

    #[test]
    fn no_match_is_none() {
        let extensions = ComposerExtensions::new().with_element_composer(|_, _| None);
        let ctx = RenderContext::new(RenderStyle::Standard);
        assert_eq!(extensions.compose_element(&extension_element("A"), &ctx), None);
    }
}
