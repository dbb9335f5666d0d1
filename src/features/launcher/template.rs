use crate::error::{PathToolsError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub const PATH_PLACEHOLDER: &str = "{path}";
pub const PARENT_PATH_PLACEHOLDER: &str = "{parent-path}";
pub const NAME_PLACEHOLDER: &str = "{name}";
pub const PATH_SLASHES_PLACEHOLDER: &str = "{path-slashes}";

/// A template rendered for one path, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// The template text with placeholders substituted, for display.
    pub rendered: String,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// How backslashes in template text are read when splitting it into arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSyntax {
    /// Backslash escapes the next character, as in a POSIX shell.
    Posix,
    /// Backslash is a path separator and always literal.
    Windows,
}

impl TemplateSyntax {
    #[cfg(windows)]
    pub const NATIVE: TemplateSyntax = TemplateSyntax::Windows;
    #[cfg(not(windows))]
    pub const NATIVE: TemplateSyntax = TemplateSyntax::Posix;
}

/// Renders `template` for `path` with the platform's [`TemplateSyntax`].
///
/// The template is tokenised before substitution so that a path is always
/// exactly one argument, whatever quotes or spaces it contains.
pub fn render(template: &str, path: &Path) -> Result<CommandLine> {
    render_with(template, path, TemplateSyntax::NATIVE)
}

pub fn render_with(template: &str, path: &Path, syntax: TemplateSyntax) -> Result<CommandLine> {
    let values = placeholder_values(path);
    let source = match syntax {
        TemplateSyntax::Posix => template.to_string(),
        TemplateSyntax::Windows => literal_backslashes(template),
    };
    let tokens = shlex::split(&source).ok_or_else(|| PathToolsError::InvalidTemplate {
        template: template.to_string(),
    })?;
    let mut argv = tokens.iter().map(|token| substitute(token, &values));
    let program = argv
        .next()
        .filter(|program| !program.is_empty())
        .ok_or_else(|| PathToolsError::InvalidTemplate {
            template: template.to_string(),
        })?;
    Ok(CommandLine {
        program,
        args: argv.collect(),
        rendered: substitute(template, &values),
    })
}

/// Doubles every backslash outside single quotes so `shlex` keeps it literal.
fn literal_backslashes(template: &str) -> String {
    let mut escaped = String::with_capacity(template.len());
    let mut in_single = false;
    let mut in_double = false;
    for ch in template.chars() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '\\' if !in_single => escaped.push('\\'),
            _ => {}
        }
        escaped.push(ch);
    }
    escaped
}

fn placeholder_values(path: &Path) -> [(&'static str, String); 4] {
    let full = path.to_string_lossy().to_string();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.to_string_lossy().to_string())
        .unwrap_or_else(|| full.clone());
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| full.clone());
    let slashes = full.replace('\\', "/");
    [
        (PATH_PLACEHOLDER, full),
        (PARENT_PATH_PLACEHOLDER, parent),
        (NAME_PLACEHOLDER, name),
        (PATH_SLASHES_PLACEHOLDER, slashes),
    ]
}

fn substitute(text: &str, values: &[(&'static str, String)]) -> String {
    values
        .iter()
        .fold(text.to_string(), |acc, (placeholder, value)| {
            acc.replace(placeholder, value)
        })
}
