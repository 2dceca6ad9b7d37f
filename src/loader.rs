//! Template lookup for chain stages.
//! Resolves a template identifier to a file under the templates root and renders
//! it with MiniJinja.
use crate::constants::TEMPLATE_CANDIDATES;
use crate::error::{Error, Result};
use crate::processor::{Context, StageRenderer};
use crate::renderer::MiniJinjaRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of templates addressable by identifier.
pub struct TemplateLibrary {
    root: PathBuf,
    renderer: MiniJinjaRenderer,
}

impl TemplateLibrary {
    /// Creates a library rooted at `root`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `root` is not a directory
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::ConfigError(format!(
                "templates directory '{}' does not exist",
                root.display()
            )));
        }

        Ok(Self { root: root.to_path_buf(), renderer: MiniJinjaRenderer::with_root(root) })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the template directories under the root, sorted, hidden entries
    /// skipped.
    ///
    /// # Errors
    /// * `Error::IoError` if the root cannot be read
    pub fn available_templates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.root())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Whether `template_id` resolves to a template file.
    pub fn template_exists(&self, template_id: &str) -> bool {
        self.find_template(template_id).is_some()
    }

    /// The renderer used for stages, also usable for plain template strings.
    pub fn renderer(&self) -> &MiniJinjaRenderer {
        &self.renderer
    }

    /// Returns the loader name of the first candidate file that exists for
    /// `template_id`, in lookup order.
    pub fn find_template(&self, template_id: &str) -> Option<String> {
        if template_id.is_empty() {
            return None;
        }
        TEMPLATE_CANDIDATES
            .iter()
            .map(|pattern| pattern.replace("{}", template_id))
            .find(|name| self.root.join(name).is_file())
    }
}

impl StageRenderer for TemplateLibrary {
    fn render_stage(&self, template_id: &str, context: &Context) -> Result<String> {
        let name = self
            .find_template(template_id)
            .ok_or_else(|| Error::TemplateNotFound { template: template_id.to_string() })?;

        debug!("Rendering '{}' from {}", template_id, self.root.join(&name).display());

        let context = serde_json::to_value(context)
            .map_err(|e| Error::TemplateError(format!("invalid context: {e}")))?;
        self.renderer.render_named(&name, &context)
    }
}
