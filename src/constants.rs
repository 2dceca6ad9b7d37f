//! Common constants used throughout chainsmith.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["chainsmith.json", "chainsmith.yml", "chainsmith.yaml"];

/// Templates root used when no configuration overrides it
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Separator between file name segments
pub const SEGMENT_SEPARATOR: &str = ".";

/// Leading marker of a decorator segment
pub const DECORATOR_PREFIX: char = '_';

/// Literal looked up by the cheap extended-naming pre-check
pub const DECORATOR_MARKER: &str = "._";

/// Context key holding the content the first stage starts from
pub const INITIAL_CONTENT_KEY: &str = "initial_content";

/// Context key holding the content produced by the previous stage
pub const CONTENT_KEY: &str = "content";

/// Context key holding the identifier of the template being applied
pub const TEMPLATE_NAME_KEY: &str = "template_name";

/// Template file locations tried for a template id, relative to the templates root.
/// `{}` is replaced by the id.
pub const TEMPLATE_CANDIDATES: [&str; 3] =
    ["partials/{}.j2", "partials/{}.html.j2", "{}/template.j2"];
