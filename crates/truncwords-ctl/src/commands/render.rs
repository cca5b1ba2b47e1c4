//! `truncwords render`: render a Tera template with the truncation filters.

use std::path::Path;

use tera::Context;
use truncwords_tera::{RenderedFile, TemplateEngine};

use crate::error::{CtlError, CtlResult};
use crate::output;
use crate::RenderArgs;

pub(crate) fn render_template(args: RenderArgs) -> CtlResult<()> {
    let mut context = match args.context.as_deref() {
        Some(path) => load_context_file(path)?,
        None => Context::new(),
    };
    for var in &args.vars {
        let (key, value) = parse_var(var)?;
        context.insert(key, value);
    }

    if args.template.is_dir() {
        let out_dir = args
            .output
            .as_deref()
            .ok_or_else(|| CtlError::OutputDirRequired(args.template.clone()))?;
        return render_directory(&args.template, out_dir, &context);
    }

    let mut engine = TemplateEngine::new();
    let name = engine.add_template_file(&args.template)?;

    let rendered = engine.render(&name, &context)?;
    tracing::debug!(template = %name, bytes = rendered.len(), "Rendered template");

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| CtlError::Write {
                path: path.clone(),
                source: e,
            })?;
            output::success(format!("Wrote {}", path.display()));
        }
        None => output::raw(&rendered).map_err(CtlError::Output)?,
    }

    Ok(())
}

/// Render every `*.tera` file in `template_dir` into `out_dir`.
fn render_directory(template_dir: &Path, out_dir: &Path, context: &Context) -> CtlResult<()> {
    let engine = TemplateEngine::load(template_dir)?;
    let rendered = engine.render_all(context)?;
    tracing::debug!(dir = %template_dir.display(), files = rendered.len(), "Rendered templates");

    for file in &rendered {
        let full_path = write_rendered(out_dir, file)?;
        output::success(format!("Created: {}", full_path.display()));
    }

    if rendered.is_empty() {
        output::warning(format!("No templates found in {}.", template_dir.display()));
    } else {
        output::blank();
        output::success(format!(
            "Generated {} file(s) from {}.",
            rendered.len(),
            template_dir.display()
        ));
    }

    Ok(())
}

fn write_rendered(out_dir: &Path, file: &RenderedFile) -> CtlResult<std::path::PathBuf> {
    let full_path = out_dir.join(&file.path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CtlError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(&full_path, &file.content).map_err(|e| CtlError::Write {
        path: full_path.clone(),
        source: e,
    })?;
    Ok(full_path)
}

/// Split `KEY=VALUE`. The key must be non-empty; the value may contain `=`.
fn parse_var(var: &str) -> CtlResult<(&str, &str)> {
    var.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| CtlError::InvalidVar(var.to_string()))
}

/// Load a template context from a `.json` file, or TOML for any other extension.
fn load_context_file(path: &Path) -> CtlResult<Context> {
    let contents = std::fs::read_to_string(path).map_err(|e| CtlError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let context_error = |message: String| CtlError::Context {
        path: path.to_path_buf(),
        message,
    };

    let value: serde_json::Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|e| context_error(e.to_string()))?,
        _ => toml::from_str(&contents).map_err(|e| context_error(e.to_string()))?,
    };

    Context::from_value(value).map_err(|e| context_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("title=Hello").unwrap(), ("title", "Hello"));
        assert_eq!(parse_var("query=a=b").unwrap(), ("query", "a=b"));
        assert_eq!(parse_var("empty=").unwrap(), ("empty", ""));
    }

    #[test]
    fn test_parse_var_rejects_malformed() {
        assert!(matches!(parse_var("novalue"), Err(CtlError::InvalidVar(_))));
        assert!(matches!(parse_var("=value"), Err(CtlError::InvalidVar(_))));
    }

    #[test]
    fn test_load_toml_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.toml");
        std::fs::write(&path, "title = \"Hello\"\nwords = 3\n").unwrap();

        let context = load_context_file(&path).unwrap();
        assert_eq!(context.get("title").and_then(|v| v.as_str()), Some("Hello"));
        assert_eq!(context.get("words").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_load_json_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, r#"{"body": "a b c", "draft": null}"#).unwrap();

        let context = load_context_file(&path).unwrap();
        assert_eq!(context.get("body").and_then(|v| v.as_str()), Some("a b c"));
        assert!(context.get("draft").is_some_and(|v| v.is_null()));
    }

    #[test]
    fn test_json_context_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            load_context_file(&path),
            Err(CtlError::Context { .. })
        ));
    }

    #[test]
    fn test_write_rendered_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let file = RenderedFile {
            path: "notes/summary.txt".to_string(),
            content: "noSpacesLine\n~".to_string(),
        };

        let full_path = write_rendered(&out_dir, &file).unwrap();
        assert_eq!(full_path, out_dir.join("notes/summary.txt"));
        assert_eq!(std::fs::read_to_string(&full_path).unwrap(), "noSpacesLine\n~");
    }

    #[test]
    fn test_render_directory() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        std::fs::create_dir(&templates).unwrap();
        std::fs::write(
            templates.join("summary.txt.tera"),
            "{{ body | truncate_words_and_keep_lines(words=2) }}",
        )
        .unwrap();
        std::fs::write(templates.join("title.txt.tera"), "{{ title }}").unwrap();

        let mut context = Context::new();
        context.insert("body", "line one\nline two\n");
        context.insert("title", "Notes");
        let out_dir = dir.path().join("out");
        render_directory(&templates, &out_dir, &context).unwrap();

        let summary = std::fs::read_to_string(out_dir.join("summary.txt")).unwrap();
        assert_eq!(summary, "line one\n...");
        let title = std::fs::read_to_string(out_dir.join("title.txt")).unwrap();
        assert_eq!(title, "Notes");
    }

    #[test]
    fn test_invalid_toml_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.toml");
        std::fs::write(&path, "title = ").unwrap();

        assert!(matches!(
            load_context_file(&path),
            Err(CtlError::Context { .. })
        ));
    }
}
