//! Doxyfile template language
//!
//! Templates are plain text with ERB-style tags:
//!
//! ```text
//! PROJECT_NUMBER = <%= version %>
//! INPUT          =<%= input %>
//! <%# comments produce no output -%>
//! ```
//!
//! `<%= name %>` inserts a field, `-%>` swallows the newline after a tag,
//! `<%# ... %>` is a comment and `<%%` writes a literal `<%`. Code tags
//! (`<% ... %>`) are rejected.

mod ast;
mod grammar;
pub mod lexer;

pub use ast::{Segment, Span, Spanned, Template};
pub use grammar::parse;

/// A minimal Doxyfile using every field
pub const DEFAULT_TEMPLATE: &str = r#"# Doxyfile rendered by doxyfile-gen
<%# version and commit number identify the documented build -%>
PROJECT_NUMBER         = <%= version %> (<%= commit_number %>)
INPUT                  =<%= input %>
EXAMPLE_PATH           =<%= example_path %>
STRIP_FROM_PATH        =<%= strip_from_path %>
FILE_PATTERNS          = *.c *.h *.md
RECURSIVE              = YES
GENERATE_HTML          = YES
GENERATE_LATEX         = NO
# use_mdfile_as_mainpage = <%= use_mdfile_as_mainpage %>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let template = parse(DEFAULT_TEMPLATE).expect("Default template should be valid");
        let names: Vec<_> = template.fields().map(|f| f.node.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "version",
                "commit_number",
                "input",
                "example_path",
                "strip_from_path",
                "use_mdfile_as_mainpage",
            ]
        );
    }
}
