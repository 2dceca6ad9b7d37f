//! Extended file naming.
//! A target such as `File.html._styling._layout._content` carries an ordered stack of
//! templates in its name. This module decodes that stack.

use crate::constants::{DECORATOR_MARKER, DECORATOR_PREFIX, SEGMENT_SEPARATOR};
use std::path::{Path, PathBuf};

/// Result of decoding a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Directory as supplied, joined with the file name stripped of its decorators.
    pub base: PathBuf,
    /// Template identifiers, innermost first: `templates[0]` is applied first.
    pub templates: Vec<String>,
}

impl ChainDescriptor {
    /// Descriptor of a file name without any chain.
    fn unchained<P: AsRef<Path>>(filename: P) -> Self {
        Self { base: filename.as_ref().to_path_buf(), templates: Vec::new() }
    }

    /// Whether the file name carried at least one decorator.
    pub fn is_chained(&self) -> bool {
        !self.templates.is_empty()
    }
}

/// Decodes the template chain encoded in `filename`.
///
/// The final path component is split on `.`; the first segment starting with `_`
/// opens the decorator suffix. Segments before it form the base name, the matched
/// segment and everything after it (underscore stripped) form the chain, reversed so
/// the decorator farthest from the base is applied first.
///
/// Never fails: a name without decorators yields the name itself and no templates.
///
/// # Examples
/// ```
/// use chainsmith::chain::parse;
///
/// let chain = parse("app/views/File.html._layout._content");
/// assert_eq!(chain.base, std::path::PathBuf::from("app/views/File.html"));
/// assert_eq!(chain.templates, vec!["content", "layout"]);
/// ```
pub fn parse<P: AsRef<Path>>(filename: P) -> ChainDescriptor {
    let path = filename.as_ref();
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return ChainDescriptor::unchained(path);
    };

    let segments: Vec<&str> = name.split(SEGMENT_SEPARATOR).collect();
    let Some(start) = segments.iter().position(|s| s.starts_with(DECORATOR_PREFIX)) else {
        return ChainDescriptor::unchained(path);
    };

    let base_name = segments[..start].join(SEGMENT_SEPARATOR);
    let base = match path.parent() {
        Some(dir) => dir.join(base_name),
        None => PathBuf::from(base_name),
    };

    // Trailing segments without a leading underscore are swept into the chain too.
    let templates = segments[start..]
        .iter()
        .rev()
        .map(|&s| s.strip_prefix(DECORATOR_PREFIX).unwrap_or(s).to_string())
        .collect();

    ChainDescriptor { base, templates }
}

/// Cheap pre-check: whether the file name contains the literal `._`.
///
/// This is a substring test on the final path component only, not a full parse.
pub fn uses_extended_naming<P: AsRef<Path>>(filename: P) -> bool {
    filename
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().contains(DECORATOR_MARKER))
        .unwrap_or(false)
}
