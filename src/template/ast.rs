//! Parsed template representation

pub use super::lexer::Span;

/// A node with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// One piece of a template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text copied to the output
    Text(String),
    /// `<%= name %>`: substituted with the field's value
    Field(Spanned<String>),
    /// `<%# ... %>`: produces nothing
    Comment,
}

/// A parsed template: literal text interleaved with field references
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Field references in template order
    pub fn fields(&self) -> impl Iterator<Item = &Spanned<String>> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name),
            _ => None,
        })
    }

    /// Render by resolving each field reference through `lookup`
    ///
    /// Stops at the first reference `lookup` rejects and returns its error.
    pub fn render_with<F, E>(&self, mut lookup: F) -> Result<String, E>
    where
        F: FnMut(&Spanned<String>) -> Result<String, E>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(name) => out.push_str(&lookup(name)?),
                Segment::Comment => {}
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template {
            segments: vec![
                Segment::Text("A =".to_string()),
                Segment::Field(Spanned::new("a".to_string(), 6..7)),
                Segment::Comment,
                Segment::Text("\nB =".to_string()),
                Segment::Field(Spanned::new("b".to_string(), 20..21)),
            ],
        }
    }

    #[test]
    fn test_fields_in_order() {
        let names: Vec<_> = sample().fields().map(|f| f.node.clone()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_render_with_lookup() {
        let out: Result<String, ()> = sample().render_with(|f| Ok(format!(" <{}>", f.node)));
        assert_eq!(out, Ok("A = <a>\nB = <b>".to_string()));
    }

    #[test]
    fn test_render_with_stops_at_first_error() {
        let mut seen = Vec::new();
        let out = sample().render_with(|f| {
            seen.push(f.node.clone());
            Err::<String, _>(f.span.clone())
        });
        assert_eq!(out, Err(6..7));
        assert_eq!(seen, vec!["a"]);
    }
}
