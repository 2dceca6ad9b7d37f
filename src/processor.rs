//! Chain execution.
//! Applies a decoded template chain stage by stage, writing one intermediate
//! artifact per stage until the base path itself is written.

use crate::chain::parse;
use crate::constants::{
    CONTENT_KEY, DECORATOR_MARKER, INITIAL_CONTENT_KEY, TEMPLATE_NAME_KEY,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered variables handed to every stage.
pub type Context = IndexMap<String, serde_json::Value>;

/// Renders one stage of a chain.
pub trait StageRenderer {
    /// Renders the template identified by `template_id` with `context`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the id cannot be resolved
    /// * any render failure of the underlying engine
    fn render_stage(&self, template_id: &str, context: &Context) -> Result<String>;
}

/// Persists stage artifacts.
pub trait ArtifactWriter {
    /// Writes `content` to `path`, creating parent directories and replacing any
    /// existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Writes artifacts to the local file system, resolving relative paths against
/// the current directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl ArtifactWriter for LocalFileSystem {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let base_path = std::env::current_dir().unwrap_or_default();
        let abs_path =
            if path.is_absolute() { path.to_path_buf() } else { base_path.join(path) };

        if let Some(parent) = abs_path.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        fs::write(abs_path, content).map_err(Error::IoError)
    }
}

/// Builds the file name written after stage `index`.
///
/// The templates still pending after this stage are folded back into decorator
/// form, so the result is exactly the name [`parse`] would decode into `base` and
/// `templates[index + 1..]`. The last stage writes `base` itself.
///
/// # Examples
/// ```
/// use chainsmith::processor::build_intermediate_filename;
/// use std::path::{Path, PathBuf};
///
/// let templates = ["content", "layout", "styling"].map(String::from);
/// assert_eq!(
///     build_intermediate_filename(Path::new("File.html"), &templates, 0),
///     PathBuf::from("File.html._styling._layout")
/// );
/// ```
pub fn build_intermediate_filename(base: &Path, templates: &[String], index: usize) -> PathBuf {
    let remaining = templates.get(index + 1..).unwrap_or_default();
    if remaining.is_empty() {
        return base.to_path_buf();
    }

    let mut name = base.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    for template in remaining.iter().rev() {
        name.push(DECORATOR_MARKER);
        name.push(template);
    }

    match base.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Content the first stage starts from.
pub fn initial_content(context: &Context) -> String {
    match context.get(INITIAL_CONTENT_KEY) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Caller context with the stage keys layered on top.
pub fn stage_context(context: &Context, content: &str, template_name: &str) -> Context {
    let mut stage = context.clone();
    stage.insert(CONTENT_KEY.to_string(), serde_json::Value::from(content));
    stage.insert(TEMPLATE_NAME_KEY.to_string(), serde_json::Value::from(template_name));
    stage
}

/// Executes template chains against a render and a write capability.
pub struct ChainProcessor<'a> {
    renderer: &'a dyn StageRenderer,
    writer: &'a dyn ArtifactWriter,
}

impl<'a> ChainProcessor<'a> {
    pub fn new(renderer: &'a dyn StageRenderer, writer: &'a dyn ArtifactWriter) -> Self {
        Self { renderer, writer }
    }

    /// Applies `templates` in order, innermost first.
    ///
    /// Each stage renders with the caller context plus `content` (the previous
    /// stage's output, seeded from `initial_content`) and `template_name`, then
    /// writes its output to the intermediate file name for that stage.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The path written by the last stage, i.e. `base`
    ///
    /// # Errors
    /// * `Error::ProcessError` wrapping the render or write failure of the first
    ///   failing stage. Files written by earlier stages are left in place.
    pub fn apply_chain(
        &self,
        base: &Path,
        templates: &[String],
        context: &Context,
    ) -> Result<PathBuf> {
        let mut current_content = initial_content(context);
        let mut current_file = base.to_path_buf();

        for (index, template) in templates.iter().enumerate() {
            let intermediate = build_intermediate_filename(base, templates, index);
            debug!(
                "Stage {}/{}: applying '{}' -> {}",
                index + 1,
                templates.len(),
                template,
                intermediate.display()
            );

            let stage = stage_context(context, &current_content, template);
            let wrap = |source: Error| Error::ProcessError {
                target: base.display().to_string(),
                stage: index,
                template: template.clone(),
                source: Box::new(source),
            };

            let content = self.renderer.render_stage(template, &stage).map_err(wrap)?;
            self.writer.write(&intermediate, &content).map_err(wrap)?;

            current_content = content;
            current_file = intermediate;
        }

        Ok(current_file)
    }

    /// Parses `file_path` and applies its chain.
    ///
    /// A path without a chain is returned unchanged and nothing is written.
    pub fn process<P: AsRef<Path>>(&self, file_path: P, context: &Context) -> Result<PathBuf> {
        let file_path = file_path.as_ref();
        let chain = parse(file_path);
        if !chain.is_chained() {
            debug!("No template chain in {}", file_path.display());
            return Ok(file_path.to_path_buf());
        }

        debug!(
            "Processing {} as {} with chain {:?}",
            file_path.display(),
            chain.base.display(),
            chain.templates
        );
        self.apply_chain(&chain.base, &chain.templates, context)
    }
}
