//! Template rendering engine with Tera.
//!
//! Three embedded templates: a shared changelog formatter plus one document
//! template per distribution, each including the changelog by name. The
//! document template is selected by [`Distribution`], never by a
//! caller-supplied string. Custom filters are a fixed registered set; see
//! [`filters`].
//!
//! Template parse errors surface at construction time. A renderer that
//! exists can only fail on the `maj_min` filter receiving an unparseable
//! version.

pub mod filters;

use tera::{Context as TeraContext, Tera};

use crate::core::{Distribution, Result};
use crate::notes::ReleaseNotesContext;

/// The shared changelog sub-template, referenced by both documents.
const CHANGELOG_TEMPLATE: &str = include_str!("templates/changelog.md.tera");
/// The k3s document template.
const K3S_TEMPLATE: &str = include_str!("templates/k3s.md.tera");
/// The RKE2 document template. Contains a deliberate `<FILL ME OUT!>`
/// placeholder for the manually written release summary.
const RKE2_TEMPLATE: &str = include_str!("templates/rke2.md.tera");

/// Release notes renderer: a preloaded Tera instance with the custom
/// filter set and all three named templates.
pub struct NotesRenderer {
    tera: Tera,
}

impl NotesRenderer {
    /// Build the renderer, parsing all embedded templates.
    ///
    /// # Errors
    ///
    /// Returns a template error if any embedded template fails to parse.
    /// This is a structural defect, not a data problem, and aborts startup.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("maj_min", filters::maj_min);
        tera.register_filter("trim_periods", filters::trim_periods);
        tera.register_filter("capitalize_first", filters::capitalize_first);
        tera.register_filter("split_lines", filters::split_lines);
        tera.add_raw_templates(vec![
            ("changelog.md", CHANGELOG_TEMPLATE),
            (Distribution::K3s.template_name(), K3S_TEMPLATE),
            (Distribution::Rke2.template_name(), RKE2_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Render the document template for `distribution` against `context`.
    ///
    /// Empty context fields render as empty strings in place; the only
    /// failure mode is the `maj_min` filter rejecting its input.
    pub fn render(&self, distribution: Distribution, context: &ReleaseNotesContext) -> Result<String> {
        let tera_context = TeraContext::from_serialize(context)?;
        Ok(self.tera.render(distribution.template_name(), &tera_context)?)
    }
}
