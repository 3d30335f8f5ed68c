//! Annotated rendering of dump decode errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::DecodeError;

/// Builder for rendering a [`DecodeError`] against the dump it came from.
pub struct DecodeErrorPrinter<'e, 's> {
    error: &'e DecodeError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DecodeErrorPrinter<'e, 's> {
    pub fn new(error: &'e DecodeError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(span) = self.error.span() else {
            return match self.path {
                Some(path) => write!(w, "error: {path}: {}", self.error),
                None => write!(w, "error: {}", self.error),
            };
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(span, self.source.len()))
                .label(self.error.label()),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

impl DecodeError {
    pub fn printer<'e, 's>(&'e self, source: &'s str) -> DecodeErrorPrinter<'e, 's> {
        DecodeErrorPrinter::new(self, source)
    }
}
