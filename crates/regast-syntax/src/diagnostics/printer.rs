//! Diagnostics drawn under the source they point into.

use std::fmt;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Diagnostics annotated against `source`, one snippet per message.
///
/// Related ranges are drawn as secondary annotations in the same snippet.
pub struct Annotated<'a> {
    diagnostics: &'a Diagnostics,
    source: &'a str,
}

impl fmt::Display for Annotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = Renderer::plain();
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let report = [group(diag, self.source)];
            write!(f, "{}", renderer.render(&report))?;
        }
        Ok(())
    }
}

fn group<'a>(diag: &'a DiagnosticMessage, source: &'a str) -> Group<'a> {
    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(clamp(diag.range, source.len())));
    for related in &diag.related {
        snippet = snippet.annotation(
            AnnotationKind::Context
                .span(clamp(related.range, source.len()))
                .label(&related.message),
        );
    }

    let level = match diag.severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    };
    level.primary_title(&diag.message).element(snippet)
}

/// Widens empty ranges to one column and clamps ranges past the end of `limit`.
fn clamp(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start = usize::from(range.start()).min(limit);
    let end = usize::from(range.end()).min(limit);
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

impl Diagnostics {
    /// Renders against `source`, which must be the text the ranges index into.
    pub fn annotate<'a>(&'a self, source: &'a str) -> Annotated<'a> {
        Annotated {
            diagnostics: self,
            source,
        }
    }
}
