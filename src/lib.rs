//! doxyfile-gen - render Doxygen configuration files from templates
//!
//! A [`RenderContext`] holds a template and a handful of named fields
//! (version, commit number, path lists). Rendering substitutes the fields into
//! the template's `<%= name %>` tags.
//!
//! # Example
//!
//! ```rust
//! use doxyfile_gen::RenderContext;
//!
//! let ctx = RenderContext::new("PROJECT_NUMBER = <%= version %>\nINPUT =<%= input %>\n")
//!     .with_version("1.2.0")
//!     .with_input_paths(["include", "src"]);
//!
//! assert_eq!(ctx.render().unwrap(), "PROJECT_NUMBER = 1.2.0\nINPUT = include src\n");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod template;

pub use config::{ConfigError, DoxyfileConfig};
pub use context::{joined, RenderContext, FIELD_NAMES};
pub use error::{ParseError, RenderError};
pub use template::{parse, Template, DEFAULT_TEMPLATE};

/// Render a template with values from a configuration
///
/// # Example
///
/// ```rust
/// use doxyfile_gen::{render, DoxyfileConfig};
///
/// let config = DoxyfileConfig::default().with_example_path(vec!["test".to_string()]);
/// let out = render("EXAMPLE_PATH =<%= example_path %>", config).unwrap();
/// assert_eq!(out, "EXAMPLE_PATH = test");
/// ```
pub fn render(template: &str, config: DoxyfileConfig) -> Result<String, RenderError> {
    RenderContext::from_config(template, config).render()
}
