//! Template rendering for packstrap.
//! Offers two substitution policies: lenient MiniJinja rendering for file
//! bodies, and strict `{field}` formatting for file names.
use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use std::sync::LazyLock;

/// Escaped braces, any `{...}` group, or a lone brace.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{[^{}]*\}|[{}]").expect("pattern is valid"));

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template body with the given context. Undefined variables
    /// and `none` values render as empty strings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Substitutes `{field}` placeholders in a file name.
    ///
    /// # Errors
    /// * `Error::MissingField` if a placeholder names a field absent from `context`
    /// * `Error::FormatError` if the name contains a malformed placeholder
    fn format_name(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        format_fields(name, context)
    }
}

fn is_identifier(field: &str) -> bool {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn field_value(field: &str, name: &str, context: &serde_json::Value) -> Result<String> {
    let format_error = |reason: String| Error::FormatError {
        name: name.to_string(),
        reason,
    };

    if field.contains([':', '!']) {
        return Err(format_error(format!(
            "conversions and format specs are not supported in '{{{field}}}'"
        )));
    }
    if !is_identifier(field) {
        return Err(format_error(format!("'{{{field}}}' is not a field name")));
    }

    match context.get(field) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Null) => Ok(String::new()),
        Some(value) => Ok(value.to_string()),
        None => Err(Error::MissingField {
            field: field.to_string(),
            name: name.to_string(),
        }),
    }
}

/// Replaces `{field}` with the matching context value. `{{` and `}}` stand
/// for literal braces. Strings are inserted verbatim, `null` as nothing, any
/// other value in its JSON form.
///
/// Lone braces, positional or dotted fields, conversions (`!r`) and format
/// specs (`:>6`) are rejected.
pub fn format_fields(name: &str, context: &serde_json::Value) -> Result<String> {
    let mut formatted = String::with_capacity(name.len());
    let mut last = 0;

    for placeholder in PLACEHOLDER.find_iter(name) {
        formatted.push_str(&name[last..placeholder.start()]);
        last = placeholder.end();

        match placeholder.as_str() {
            "{{" => formatted.push('{'),
            "}}" => formatted.push('}'),
            brace @ ("{" | "}") => {
                return Err(Error::FormatError {
                    name: name.to_string(),
                    reason: format!("single '{brace}' encountered"),
                });
            }
            group => {
                let field = &group[1..group.len() - 1];
                formatted.push_str(&field_value(field, name, context)?);
            }
        }
    }
    formatted.push_str(&name[last..]);

    Ok(formatted)
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with lenient undefined handling, empty output for
    /// `none`, and the case conversion filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_formatter(|out, state, value| {
            if value.is_none() {
                Ok(())
            } else {
                minijinja::escape_formatter(out, state, value)
            }
        });
        env.add_filter("snake_case", |s: String| s.to_snake_case());
        env.add_filter("camel_case", |s: String| s.to_camel_case());
        env.add_filter("pascal_case", |s: String| s.to_pascal_case());
        env.add_filter("kebab_case", |s: String| s.to_kebab_case());
        env.add_filter("screaming_snake_case", |s: String| {
            s.to_screaming_snake_case()
        });
        env.add_filter("title_case", |s: String| s.to_title_case());
        Self { env }
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
    /// * `Error::MinijinjaError` on syntax errors or failing filters
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(Error::MinijinjaError)
    }
}
