use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;
use crate::utils::{SourceMap, Span};
use std::path::PathBuf;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::Io { .. } => codes::input::FILE_READ_ERROR,
            Self::LexicalAnalysis(e) => e.error_code(),
            Self::SyntaxAnalysis(e) => e.error_code(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Io { .. } => None,
            Self::LexicalAnalysis(e) => e.span(),
            Self::SyntaxAnalysis(e) => e.span(),
        }
    }

    /// Caret diagnostic against `source`, or the plain message when the
    /// error has no location
    pub fn diagnostic(&self, source: &str) -> String {
        match self.span() {
            Some(span) => SourceMap::new(source).format_error(&span, &self.to_string()),
            None => format!("error: {}\n", self),
        }
    }
}
