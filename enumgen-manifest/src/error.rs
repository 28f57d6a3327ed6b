use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::span;

/// Result type for definition file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span::offset_of(self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Wrap a model error, labelling `name` where it appears in the source.
    pub fn definition_error(&self, cause: enumgen_core::Error) -> Box<Error> {
        let name = cause.subject();
        let span = match &cause {
            // The second occurrence is the offending one
            enumgen_core::Error::DuplicateEntryName { .. } => span::find_last_name_span(self.src, &name),
            _ => span::find_name_span(self.src, &name),
        };
        let help = help_of(&cause);
        Box::new(Error::Definition {
            src: self.named_source(),
            span,
            help,
            cause,
        })
    }

    /// Create an invalid option error for an `[output]` key.
    pub fn invalid_option(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidOption {
            src: self.named_source(),
            span: span::find_key_span(self.src, key),
            key: key.to_string(),
            message: message.into(),
        })
    }
}

fn help_of(cause: &enumgen_core::Error) -> Option<String> {
    cause.help().map(|help| help.to_string())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(enumgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse enum definition")]
    #[diagnostic(code(enumgen::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse enum definition")]
    #[diagnostic(code(enumgen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{cause}")]
    #[diagnostic(code(enumgen::invalid_definition))]
    Definition {
        #[source_code]
        src: NamedSource<String>,
        #[label("defined here")]
        span: Option<SourceSpan>,
        #[help]
        help: Option<String>,
        cause: enumgen_core::Error,
    },

    #[error("invalid output option '{key}': {message}")]
    #[diagnostic(code(enumgen::invalid_option))]
    InvalidOption {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        key: String,
        message: String,
    },
}

impl Error {
    /// The model error behind a [`Error::Definition`], if any.
    pub fn definition_cause(&self) -> Option<&enumgen_core::Error> {
        match self {
            Error::Definition { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
