//! Render context: named Doxyfile fields plus the template they fill

use tracing::{debug, trace};

use crate::config::DoxyfileConfig;
use crate::error::RenderError;
use crate::template::{self, Spanned};

/// Every field name a template may reference
pub const FIELD_NAMES: &[&str] = &[
    "commit_number",
    "version",
    "use_mdfile_as_mainpage",
    "input",
    "example_path",
    "strip_from_path",
];

/// Join a path list the way Doxyfile list values are written: each entry
/// preceded by a single space, so `"INPUT =" + joined` reads `INPUT = a b`.
pub fn joined(paths: &[String]) -> String {
    paths.iter().fold(String::new(), |mut acc, path| {
        acc.push(' ');
        acc.push_str(path);
        acc
    })
}

/// A template together with the values substituted into it
///
/// The template text is fixed at construction and only parsed when rendering,
/// so a malformed template is reported by [`render`](Self::render).
///
/// # Example
///
/// ```rust
/// use doxyfile_gen::RenderContext;
///
/// let ctx = RenderContext::new("INPUT =<%= input %>")
///     .with_input_paths(["src", "include"]);
/// assert_eq!(ctx.render().unwrap(), "INPUT = src include");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    template: String,
    commit_number: String,
    version: String,
    use_mdfile_as_mainpage: Option<bool>,
    input_paths: Vec<String>,
    example_paths: Vec<String>,
    strip_from_path_paths: Vec<String>,
}

impl RenderContext {
    /// Create a context with all fields unset
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// Create a context with fields taken from a configuration
    pub fn from_config(template: impl Into<String>, config: DoxyfileConfig) -> Self {
        let mut ctx = Self::new(template);
        ctx.apply(config);
        ctx
    }

    /// Overwrite every field that the configuration sets
    pub fn apply(&mut self, config: DoxyfileConfig) {
        if let Some(commit_number) = config.commit_number {
            self.commit_number = commit_number;
        }
        if let Some(version) = config.version {
            self.version = version;
        }
        if config.use_mdfile_as_mainpage.is_some() {
            self.use_mdfile_as_mainpage = config.use_mdfile_as_mainpage;
        }
        if let Some(paths) = config.input {
            self.input_paths = paths;
        }
        if let Some(paths) = config.example_path {
            self.example_paths = paths;
        }
        if let Some(paths) = config.strip_from_path {
            self.strip_from_path_paths = paths;
        }
    }

    /// The raw template text
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn commit_number(&self) -> &str {
        &self.commit_number
    }

    pub fn set_commit_number(&mut self, commit_number: impl Into<String>) {
        self.commit_number = commit_number.into();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// The mainpage flag, None until set
    pub fn use_mdfile_as_mainpage(&self) -> Option<bool> {
        self.use_mdfile_as_mainpage
    }

    pub fn set_use_mdfile_as_mainpage(&mut self, flag: bool) {
        self.use_mdfile_as_mainpage = Some(flag);
    }

    /// Return the mainpage flag to its unset state
    pub fn clear_use_mdfile_as_mainpage(&mut self) {
        self.use_mdfile_as_mainpage = None;
    }

    /// Input paths, each preceded by a space
    pub fn input_paths(&self) -> String {
        joined(&self.input_paths)
    }

    /// Replace the input paths
    pub fn set_input_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_paths = paths.into_iter().map(Into::into).collect();
    }

    /// Example paths, each preceded by a space
    pub fn example_paths(&self) -> String {
        joined(&self.example_paths)
    }

    /// Replace the example paths
    pub fn set_example_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.example_paths = paths.into_iter().map(Into::into).collect();
    }

    /// Path prefixes stripped from file names, each preceded by a space
    pub fn strip_from_path_paths(&self) -> String {
        joined(&self.strip_from_path_paths)
    }

    /// Replace the path prefixes stripped from file names
    pub fn set_strip_from_path_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_from_path_paths = paths.into_iter().map(Into::into).collect();
    }

    /// Set the commit number
    pub fn with_commit_number(mut self, commit_number: impl Into<String>) -> Self {
        self.set_commit_number(commit_number);
        self
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.set_version(version);
        self
    }

    /// Set the mainpage flag
    pub fn with_use_mdfile_as_mainpage(mut self, flag: bool) -> Self {
        self.set_use_mdfile_as_mainpage(flag);
        self
    }

    /// Set the input paths
    pub fn with_input_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_input_paths(paths);
        self
    }

    /// Set the example paths
    pub fn with_example_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_example_paths(paths);
        self
    }

    /// Set the path prefixes stripped from file names
    pub fn with_strip_from_path_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_strip_from_path_paths(paths);
        self
    }

    /// Value of a field as it appears in rendered output
    ///
    /// Returns None if `name` is not one of [`FIELD_NAMES`].
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "commit_number" => self.commit_number.clone(),
            "version" => self.version.clone(),
            // Unset renders as nothing, like the other unset scalars
            "use_mdfile_as_mainpage" => self
                .use_mdfile_as_mainpage
                .map(|flag| flag.to_string())
                .unwrap_or_default(),
            "input" => self.input_paths(),
            "example_path" => self.example_paths(),
            "strip_from_path" => self.strip_from_path_paths(),
            _ => return None,
        };
        Some(value)
    }

    /// Substitute the current field values into the template
    pub fn render(&self) -> Result<String, RenderError> {
        let template = template::parse(&self.template)?;
        let out = template.render_with(|name| self.resolve(name))?;
        debug!(
            fields = template.fields().count(),
            bytes = out.len(),
            "rendered template"
        );
        Ok(out)
    }

    /// Parse the template and check every reference without rendering
    ///
    /// Returns the referenced field names in template order.
    pub fn check(&self) -> Result<Vec<String>, RenderError> {
        let template = template::parse(&self.template)?;
        template
            .fields()
            .map(|name| self.resolve(name).map(|_| name.node.clone()))
            .collect()
    }

    fn resolve(&self, name: &Spanned<String>) -> Result<String, RenderError> {
        trace!(field = %name.node, "resolving field");
        self.field(&name.node).ok_or_else(|| {
            RenderError::unresolved(&name.node, name.span.clone(), suggest(&name.node))
        })
    }
}

/// Field names within a small edit distance of `name`
fn suggest(name: &str) -> Vec<String> {
    FIELD_NAMES
        .iter()
        .filter(|candidate| edit_distance(name, candidate) <= 2)
        .map(|candidate| candidate.to_string())
        .collect()
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}
