//! Startup script template
//!
//! Provides variable substitution for the generated REPL script.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid variable pattern"));

/// The file the startup script is rendered from, compiled into the binary.
const STARTUP_TEMPLATE: &str = include_str!("../templates/startup.evcxr");

/// A script template with `{{variable}}` placeholders
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    /// Raw template content
    pub content: String,
    /// Variables extracted from the content, in order of first appearance
    pub variables: Vec<TemplateVariable>,
}

/// Variable definition in a template
#[derive(Debug, Clone)]
pub struct TemplateVariable {
    /// Variable name
    pub name: String,
    /// Default value
    pub default: Option<String>,
    /// Whether rendering fails when no value is provided
    pub required: bool,
}

impl ScriptTemplate {
    /// Create a template, extracting its variables
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let variables = Self::extract_variables(&content);
        Self { content, variables }
    }

    /// Set a variable's default value
    pub fn with_default(mut self, name: &str, default: impl Into<String>) -> Self {
        if let Some(var) = self.variables.iter_mut().find(|v| v.name == name) {
            var.default = Some(default.into());
        }
        self
    }

    /// Mark a variable as required
    pub fn with_required(mut self, name: &str) -> Self {
        if let Some(var) = self.variables.iter_mut().find(|v| v.name == name) {
            var.required = true;
        }
        self
    }

    /// Extract variables from template content
    fn extract_variables(content: &str) -> Vec<TemplateVariable> {
        let mut seen = HashSet::new();
        let mut variables = Vec::new();

        for cap in VARIABLE_RE.captures_iter(content) {
            let name = cap[1].to_string();
            if seen.insert(name.clone()) {
                variables.push(TemplateVariable {
                    name,
                    default: None,
                    required: false,
                });
            }
        }

        variables
    }

    /// Render template with provided values
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let map: HashMap<&str, &str> = values.iter().copied().collect();
        self.render_map(&map)
    }

    /// Render template with a value map. Unset variables fall back to
    /// their default, or the empty string.
    pub fn render_map(&self, values: &HashMap<&str, &str>) -> String {
        let mut result = self.content.clone();

        for var in &self.variables {
            let placeholder = format!("{{{{{}}}}}", var.name);
            let value = values
                .get(var.name.as_str())
                .copied()
                .or(var.default.as_deref())
                .unwrap_or("");

            result = result.replace(&placeholder, value);
        }

        result
    }

    /// Render with validation of required variables
    pub fn render_validated(&self, values: &HashMap<&str, &str>) -> Result<String, RenderError> {
        for var in &self.variables {
            if var.required && !values.contains_key(var.name.as_str()) && var.default.is_none() {
                return Err(RenderError::MissingRequired(var.name.clone()));
            }
        }

        Ok(self.render_map(values))
    }

    /// Get variable names
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }
}

/// Errors during template rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing required variable: {0}")]
    MissingRequired(String),
}

/// Render the startup script evcxr will run.
///
/// The script pins the published crate version in its `:dep` line. A quiet
/// script loads silently; `noisy` appends a line that announces the helper
/// when the REPL starts.
pub fn render_startup_script(noisy: bool) -> Result<String, RenderError> {
    let notice = if noisy {
        "\nprintln!(\"xtab startup script loaded; .tab() is available\");"
    } else {
        ""
    };
    ScriptTemplate::new(STARTUP_TEMPLATE)
        .with_required("version")
        .render_validated(&HashMap::from([
            ("version", env!("CARGO_PKG_VERSION")),
            ("notice", notice),
        ]))
}
