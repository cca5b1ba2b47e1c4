//! Load `.tera` template files from a template directory.

use std::path::Path;

use tera::Tera;

/// Load all `.tera` files from a template directory into a Tera instance.
///
/// The templates are registered by their filename (e.g., `post.md.tera`).
pub(crate) fn load_templates_from_dir(template_dir: &Path) -> Result<Tera, LoaderError> {
    let glob_pattern = template_dir.join("*.tera").to_string_lossy().to_string();

    Tera::new(&glob_pattern).map_err(|e| LoaderError::Tera {
        dir: template_dir.to_path_buf(),
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to load templates from {dir}: {source}")]
    Tera {
        dir: std::path::PathBuf,
        source: tera::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_templates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("post.md.tera"), "{{ title }}\n").unwrap();
        fs::write(dir.path().join("index.md.tera"), "{{ summary }}\n").unwrap();

        let tera = load_templates_from_dir(dir.path()).unwrap();
        let mut names: Vec<_> = tera.get_template_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["index.md.tera", "post.md.tera"]);
    }

    #[test]
    fn test_load_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let tera = load_templates_from_dir(dir.path()).unwrap();
        assert_eq!(tera.get_template_names().count(), 0);
    }

    #[test]
    fn test_ignores_non_tera_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("post.md.tera"), "{{ body }}").unwrap();
        fs::write(dir.path().join("README.md"), "# Not a template").unwrap();

        let tera = load_templates_from_dir(dir.path()).unwrap();
        assert_eq!(tera.get_template_names().count(), 1);
    }

    #[test]
    fn test_syntax_error_reports_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.tera"), "{{ unclosed").unwrap();

        let err = load_templates_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to load templates"));
    }
}
