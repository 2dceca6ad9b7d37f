//! Template renderer and rendering functionality for chainsmith.
//! Renders template strings with MiniJinja, with naming filters available to
//! every template.
use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::{path_loader, AutoEscape, Environment};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
#[derive(Clone)]
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the naming filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        // Stage output is fed verbatim into the next stage.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("camelize", |value: String| value.to_class_case());
        env.add_filter("underscore", |value: String| value.to_snake_case());
        env.add_filter("pluralize", |value: String| value.to_plural());
        env.add_filter("singularize", |value: String| value.to_singular());
        Self { env }
    }

    /// Creates a renderer able to load named templates from `root`.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        let mut renderer = Self::new();
        renderer.env.set_loader(path_loader(root.as_ref().to_path_buf()));
        renderer
    }

    /// Renders a named template resolved by the loader.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the loader root
    /// * `context` - JSON context for variable interpolation
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the loader has no such template
    /// * `Error::MinijinjaError` if the template fails to parse or render
    pub fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(|e| match e.kind() {
            minijinja::ErrorKind::TemplateNotFound => {
                Error::TemplateNotFound { template: name.to_string() }
            }
            _ => Error::MinijinjaError(e),
        })?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}
