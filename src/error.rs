//! Error types for template parsing and rendering

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern, RichReason};
use thiserror::Error;

use crate::template::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Malformed template syntax
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Create a syntax error
    pub fn syntax(span: Span, message: impl Into<String>, expected: Vec<String>) -> Self {
        Self::Syntax {
            span,
            message: message.into(),
            expected,
        }
    }

    /// Location of the error in the template
    pub fn span(&self) -> &Span {
        match self {
            Self::Syntax { span, .. } => span,
        }
    }

    /// Format the error with template context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                report(
                    source,
                    filename,
                    span,
                    message,
                    &format!("{}{}", message, expected_str),
                )
            }
        }
    }
}

impl<'a> From<Rich<'a, Token>> for ParseError {
    fn from(err: Rich<'a, Token>) -> Self {
        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of template".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some(format_token(tok)),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of template".to_string()),
                RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                RichPattern::Any => Some("any token".to_string()),
                RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Text(s) => format!("text \"{}\"", s.escape_debug()),
        other => format!("'{}'", other.as_source()),
    }
}

/// Errors returned by [`RenderContext::render`](crate::RenderContext::render)
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template text is malformed
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// The template references a name that is not a field of the context
    #[error("unresolved field '{name}'{}", format_suggestions(suggestions))]
    UnresolvedField {
        name: String,
        span: Span,
        suggestions: Vec<String>,
    },
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

impl RenderError {
    /// Create an unresolved field error with suggestions
    pub fn unresolved(name: impl Into<String>, span: Span, suggestions: Vec<String>) -> Self {
        Self::UnresolvedField {
            name: name.into(),
            span,
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnresolvedField { suggestions, .. } => Some(suggestions),
            Self::Parse(_) => None,
        }
    }

    /// Format every contained error with template context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            Self::Parse(errors) => errors
                .iter()
                .map(|e| e.format(source, filename))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::UnresolvedField {
                name,
                span,
                suggestions,
            } => {
                let message = format!("unresolved field '{}'", name);
                let label = if suggestions.is_empty() {
                    "not a known field".to_string()
                } else {
                    format!("did you mean {}?", suggestions.join(" or "))
                };
                report(source, filename, span, &message, &label)
            }
        }
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(" or "))
    }
}

fn report(source: &str, filename: &str, span: &Span, message: &str, label: &str) -> String {
    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, filename, span.start)
        .with_message(message)
        .with_label(
            Label::new((filename, span.clone()))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf);
    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        // Writing into a Vec only fails on a span outside the source
        Err(_) => format!("{}: {}", filename, message),
    }
}
