//! Artifact generation.
//! Decides, per target, between applying the template chain encoded in its name
//! and rendering a single named template to it.

use crate::chain::{parse, uses_extended_naming};
use crate::error::{Error, Result};
use crate::processor::{
    initial_content, stage_context, ArtifactWriter, ChainProcessor, Context, StageRenderer,
};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Generates artifacts for targets.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
    stages: &'a dyn StageRenderer,
    writer: &'a dyn ArtifactWriter,
    prompt: &'a dyn Prompter,
    skip_overwrite_check: bool,
}

impl<'a> Generator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        stages: &'a dyn StageRenderer,
        writer: &'a dyn ArtifactWriter,
        prompt: &'a dyn Prompter,
        skip_overwrite_check: bool,
    ) -> Self {
        Self { engine, stages, writer, prompt, skip_overwrite_check }
    }

    /// Renders the target path itself, so targets may contain expressions such as
    /// `app/views/{{ name | pluralize }}/index.html._layout`.
    pub fn resolve_target(&self, target: &str, context: &Context) -> Result<PathBuf> {
        let context = serde_json::to_value(context)
            .map_err(|e| Error::TemplateError(format!("invalid context: {e}")))?;
        let rendered = self.engine.render(target, &context)?;
        if rendered.trim().is_empty() {
            return Err(Error::TemplateError(format!("target '{target}' rendered to nothing")));
        }
        Ok(PathBuf::from(rendered))
    }

    /// Asks before replacing an existing final artifact.
    fn confirm_overwrite(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let replace = self.prompt.confirm(
            self.skip_overwrite_check,
            format!("File '{}' already exists. Replace it?", path.display()),
        )?;
        if replace {
            Ok(())
        } else {
            Err(Error::TargetExistsError { target: path.display().to_string() })
        }
    }

    /// Creates the artifact for `target`.
    ///
    /// # Arguments
    /// * `target` - Destination path, optionally with a template chain and expressions
    /// * `template` - Template applied when the target carries no chain
    /// * `context` - Variables available to every template
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the final artifact
    ///
    /// # Errors
    /// * `Error::TemplateError` if the target has no chain and no template is given
    /// * `Error::TargetExistsError` if replacing an existing artifact was declined
    /// * `Error::ProcessError` if a stage fails
    pub fn create(&self, target: &str, template: Option<&str>, context: &Context) -> Result<PathBuf> {
        let target = self.resolve_target(target, context)?;

        if uses_extended_naming(&target) {
            self.confirm_overwrite(&parse(&target).base)?;
            let created = ChainProcessor::new(self.stages, self.writer).process(&target, context)?;
            info!("Created {} from chain {}", created.display(), target.display());
            return Ok(created);
        }

        let Some(template) = template else {
            return Err(Error::TemplateError(format!(
                "'{}' has no template chain and no template was given",
                target.display()
            )));
        };

        self.confirm_overwrite(&target)?;
        debug!("Rendering '{}' into {}", template, target.display());

        let stage = stage_context(context, &initial_content(context), template);
        let wrap = |source: Error| Error::ProcessError {
            target: target.display().to_string(),
            stage: 0,
            template: template.to_string(),
            source: Box::new(source),
        };
        let content = self.stages.render_stage(template, &stage).map_err(wrap)?;
        self.writer.write(&target, &content).map_err(wrap)?;

        info!("Created {} from template '{}'", target.display(), template);
        Ok(target)
    }
}
