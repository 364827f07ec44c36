//! Lexer for Doxyfile templates using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Template tokens
///
/// Text outside tags is split on `<`, `%` and `-` so that tag delimiters can be
/// recognised anywhere. Inside a tag the field name arrives as a `Text` token
/// (whitespace included) and the parser trims it.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Tag openers (longer patterns win over `<%`)
    #[token("<%=")]
    OutputOpen,
    #[token("<%#")]
    CommentOpen,
    #[token("<%%")]
    EscapedOpen,
    #[token("<%")]
    CodeOpen,

    // Tag closers
    #[token("-%>")]
    TrimClose,
    #[token("%>")]
    Close,

    // Lone delimiter characters that did not form a tag
    #[token("<")]
    Lt,
    #[token("%")]
    Percent,
    #[token("-")]
    Hyphen,

    #[regex(r"[^<%\-]+", |lex| lex.slice().to_string())]
    Text(String),
}

impl Token {
    /// The source text this token was lexed from
    pub fn as_source(&self) -> &str {
        match self {
            Token::OutputOpen => "<%=",
            Token::CommentOpen => "<%#",
            Token::EscapedOpen => "<%%",
            Token::CodeOpen => "<%",
            Token::TrimClose => "-%>",
            Token::Close => "%>",
            Token::Lt => "<",
            Token::Percent => "%",
            Token::Hyphen => "-",
            Token::Text(s) => s,
        }
    }
}

/// Lex template text into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
