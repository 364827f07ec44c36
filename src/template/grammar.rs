//! Chumsky parser for Doxyfile templates

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::template::ast::{Segment, Span, Spanned, Template};
use crate::template::lexer::Token;

/// Parser output before validation and text merging
#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    /// `<%= ... %>` with its raw inner text, validated in `assemble`
    Output {
        raw: String,
        /// Byte offset where `raw` starts
        start: usize,
        tag: Span,
        trim_newline: bool,
    },
    Comment {
        trim_newline: bool,
    },
    /// `<% ... %>`, always rejected
    Code(Span),
}

/// Parse template text
///
/// # Example
///
/// ```rust
/// use doxyfile_gen::template::parse;
///
/// let template = parse("INPUT =<%= input %>").unwrap();
/// let names: Vec<_> = template.fields().map(|f| f.node.as_str()).collect();
/// assert_eq!(names, vec!["input"]);
/// ```
pub fn parse(input: &str) -> Result<Template, Vec<ParseError>> {
    let len = input.len();

    let token_iter = crate::template::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    let pieces = template_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect::<Vec<_>>())?;

    assemble(pieces)
}

fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn template_parser<'a, I>() -> impl Parser<'a, I, Vec<Piece>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let close = choice((just(Token::Close).to(false), just(Token::TrimClose).to(true)));

    let inner = none_of([Token::Close, Token::TrimClose])
        .repeated()
        .collect::<Vec<_>>();

    let output_tag = just(Token::OutputOpen)
        .ignore_then(inner.clone())
        .then(close.clone())
        .map_with(|(tokens, trim_newline), e| {
            let tag = span_range(&e.span());
            Piece::Output {
                raw: tokens.iter().map(Token::as_source).collect(),
                start: tag.start + Token::OutputOpen.as_source().len(),
                tag,
                trim_newline,
            }
        });

    let comment_tag = just(Token::CommentOpen)
        .ignore_then(inner.clone())
        .ignore_then(close.clone())
        .map(|trim_newline| Piece::Comment { trim_newline });

    let code_tag = just(Token::CodeOpen)
        .ignore_then(inner)
        .ignore_then(close)
        .map_with(|_, e| Piece::Code(span_range(&e.span())));

    // Everything else is literal, including closers outside of a tag
    let text = select! {
        Token::Text(s) => s,
        Token::Lt => "<".to_string(),
        Token::Percent => "%".to_string(),
        Token::Hyphen => "-".to_string(),
        Token::Close => "%>".to_string(),
        Token::TrimClose => "-%>".to_string(),
        Token::EscapedOpen => "<%".to_string(),
    }
    .map(Piece::Text);

    choice((output_tag, comment_tag, code_tag, text))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}

/// Extract an identifier from the inside of an output tag
///
/// `start` is the offset of `raw`; the returned span covers only the identifier.
fn field_reference(raw: &str, start: usize) -> Option<Spanned<String>> {
    let name = raw.trim();
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let start = start + (raw.len() - raw.trim_start().len());
    Some(Spanned::new(name.to_string(), start..start + name.len()))
}

/// Validate tags, merge adjacent text and apply `-%>` newline trimming
fn assemble(pieces: Vec<Piece>) -> Result<Template, Vec<ParseError>> {
    let mut segments = Vec::new();
    let mut errors = Vec::new();
    let mut pending = String::new();
    let mut trim_next = false;

    for piece in pieces {
        let (segment, trim_newline) = match piece {
            Piece::Text(text) => {
                let text = text.as_str();
                let kept = if std::mem::take(&mut trim_next) {
                    text.strip_prefix("\r\n")
                        .or_else(|| text.strip_prefix('\n'))
                        .unwrap_or(text)
                } else {
                    text
                };
                pending.push_str(kept);
                continue;
            }
            Piece::Output {
                raw,
                start,
                tag,
                trim_newline,
            } => match field_reference(&raw, start) {
                Some(name) => (Segment::Field(name), trim_newline),
                None => {
                    let message = if raw.trim().is_empty() {
                        "empty output tag".to_string()
                    } else {
                        format!("'{}' is not a valid field name", raw.trim())
                    };
                    errors.push(ParseError::syntax(tag, message, vec!["field name".to_string()]));
                    continue;
                }
            },
            Piece::Comment { trim_newline } => (Segment::Comment, trim_newline),
            Piece::Code(tag) => {
                errors.push(ParseError::syntax(
                    tag,
                    "code tags are not supported, use '<%=' to insert a field",
                    Vec::new(),
                ));
                continue;
            }
        };

        if !pending.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut pending)));
        }
        segments.push(segment);
        trim_next = trim_newline;
    }

    if !pending.is_empty() {
        segments.push(Segment::Text(pending));
    }

    if errors.is_empty() {
        Ok(Template { segments })
    } else {
        Err(errors)
    }
}
