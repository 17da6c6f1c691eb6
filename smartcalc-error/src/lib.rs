//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every fallible stage of the engine (scanning, conversion, evaluation) reports failures as the
//! single [`Error`] type, pairing one or more source spans with a concrete [`ErrorKind`]. The
//! kind knows how to render itself as an [`ariadne`] report pointing back into the offending
//! expression.

use ariadne::{Color, Label, Report, ReportKind};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as a [`dyn Any`](Any), allowing callers to downcast it to the
    /// concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Builds a report with the given message, one label applied to every span, and optional help
/// text. The hand-written [`ErrorKind`] impls delegate here so that all reports share one shape.
pub fn build_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    label: String,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
        .with_message(message)
        .with_labels(spans.iter().map(|span| {
            let mut built = Label::new((src_id, span.clone())).with_color(EXPR);
            if !label.is_empty() {
                built = built.with_message(&label);
            }
            built
        }));

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}
