//! User interaction.
//! Confirmation prompts shown before existing artifacts are replaced.

use crate::error::{Error, Result};
use dialoguer::Confirm;
use std::io;

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Asks `prompt`, answering `true` without asking when `skip_prompt` is set.
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool> {
        if skip_prompt {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }
}

/// Terminal failures surface as I/O errors.
fn prompt_error(err: dialoguer::Error) -> Error {
    Error::IoError(io::Error::from(err))
}
