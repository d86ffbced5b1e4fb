//! Seam to the rendering surface.
//!
//! Turning a record plus a template identifier into a displayable fragment
//! is an external collaborator's job. Callers pass their surface in
//! explicitly wherever one is needed; nothing in this crate registers itself
//! in, or reaches for, process-global state.

use crate::record::Record;

/// An external renderer of normalized records.
///
/// The set of valid template identifiers and the markup they produce are
/// entirely the implementor's concern.
pub trait RenderSurface {
    /// Render `record` with the template named by `template`.
    fn render(&self, template: &str, record: &Record) -> String;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &S {
    fn render(&self, template: &str, record: &Record) -> String {
        (**self).render(template, record)
    }
}
