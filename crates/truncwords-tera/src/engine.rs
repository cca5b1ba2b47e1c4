//! Tera-based template rendering engine with the truncation filters registered.

use std::path::Path;

use tera::{Context, Tera};

use super::filters;
use super::loader::{load_templates_from_dir, LoaderError};

/// Suffix stripped from template names to form output paths.
pub const TEMPLATE_SUFFIX: &str = ".tera";

/// Template engine wrapping Tera with the truncation filters pre-registered.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

/// A rendered output file ready to be written to disk.
#[derive(Debug)]
pub struct RenderedFile {
    /// Relative path for the output file.
    pub path: String,
    /// Rendered content.
    pub content: String,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// An engine with no templates yet.
    pub fn new() -> Self {
        Self::with_tera(Tera::default())
    }

    /// Load every `.tera` file in a template directory.
    pub fn load(template_dir: &Path) -> Result<Self, EngineError> {
        let tera = load_templates_from_dir(template_dir)?;
        let engine = Self::with_tera(tera);
        tracing::debug!(
            dir = %template_dir.display(),
            templates = engine.template_names().len(),
            "Loaded templates"
        );
        Ok(engine)
    }

    fn with_tera(mut tera: Tera) -> Self {
        filters::register_filters(&mut tera);
        Self { tera }
    }

    /// Add a single template file, registered under its file name. Returns that name.
    pub fn add_template_file(&mut self, path: &Path) -> Result<String, EngineError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        self.tera
            .add_template_file(path, Some(&name))
            .map_err(|e| EngineError::Template {
                template: name.clone(),
                source: e,
            })?;
        Ok(name)
    }

    /// Add a template from source text.
    pub fn add_raw_template(&mut self, name: &str, content: &str) -> Result<(), EngineError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| EngineError::Template {
                template: name.to_string(),
                source: e,
            })
    }

    /// Registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render one registered template.
    pub fn render(&self, template: &str, context: &Context) -> Result<String, EngineError> {
        self.tera
            .render(template, context)
            .map_err(|e| EngineError::Render {
                template: template.to_string(),
                source: e,
            })
    }

    /// Render every registered template. Output paths drop the `.tera` suffix.
    pub fn render_all(&self, context: &Context) -> Result<Vec<RenderedFile>, EngineError> {
        let mut rendered = Vec::new();

        for name in self.template_names() {
            let content = self.render(name, context)?;
            let path = name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name).to_string();
            rendered.push(RenderedFile { path, content });
        }

        Ok(rendered)
    }

    /// Render inline template source without registering it.
    pub fn render_str(&self, template_str: &str, context: &Context) -> Result<String, EngineError> {
        // Use a cloned Tera instance so custom filters are available for inline rendering
        let mut inline = self.tera.clone();
        inline
            .add_raw_template("__inline__", template_str)
            .map_err(|e| EngineError::Template {
                template: template_str.to_string(),
                source: e,
            })?;
        inline
            .render("__inline__", context)
            .map_err(|e| EngineError::Render {
                template: template_str.to_string(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("invalid template '{template}': {source}")]
    Template {
        template: String,
        source: tera::Error,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}
