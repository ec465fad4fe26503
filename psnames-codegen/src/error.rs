use std::{ops::Range, path::Path};

use miette::{Diagnostic, LabeledSpan, NamedSource};

use crate::input::ParseError;

#[derive(Debug)]
pub struct ErrorReport {
    src: Option<NamedSource>,
    message: String,
    location: Option<LabeledSpan>,
}

impl Diagnostic for ErrorReport {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.src.as_ref().map(|x| x as _)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.location
            .as_ref()
            .map(|loc| Box::new(std::iter::once(loc.clone())) as _)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorReport {}

impl ErrorReport {
    pub fn message(message: impl Into<String>) -> Self {
        ErrorReport {
            src: None,
            message: message.into(),
            location: None,
        }
    }

    /// An error at a specific location in an input file.
    pub fn at_span(
        message: impl Into<String>,
        label: impl Into<String>,
        span: Range<usize>,
        path: &Path,
        text: &str,
    ) -> Self {
        let location = LabeledSpan::new(Some(label.into()), span.start, span.len());
        let src = NamedSource::new(path.to_string_lossy(), text.to_owned());
        ErrorReport {
            src: Some(src),
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn from_parse_error(error: ParseError, path: &Path, text: &str) -> Self {
        ErrorReport::at_span(
            format!("failed to parse '{}'", path.display()),
            error.message,
            error.span,
            path,
            text,
        )
    }

    /// The message, without source context.
    pub fn message_text(&self) -> &str {
        &self.message
    }

    /// The label attached to the error location, if any.
    pub fn label(&self) -> Option<&str> {
        self.location.as_ref().and_then(|loc| loc.label())
    }
}
